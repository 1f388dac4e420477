// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Bounded tail reads over the enumerated application log files.
//!
//! This is a log-viewer helper: every failure mode is a value with a
//! user-facing `Display` string, never a panic. The tail is capped at
//! [`LOG_SIZE_LIMIT`] bytes by seeking relative to end-of-file, trading
//! line-boundary precision for O(1) cost on multi-gigabyte logs.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::layout::DirectoryLayout;
use crate::models::log_file::{InvalidLogKey, LogFile};

/// Maximum number of bytes returned from the end of a log file.
pub const LOG_SIZE_LIMIT: u64 = 500_000;

/// Diagnostic outcome of a tail read. The `Display` strings are rendered
/// directly by log-viewer callers.
#[derive(Debug, Error)]
pub enum LogTailError {
    /// The requested key is outside the closed log enumeration; no file was
    /// opened.
    #[error(transparent)]
    InvalidKey(#[from] InvalidLogKey),

    /// The mapped file could not be opened.
    #[error("Could not open log file at path {}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but holds zero bytes.
    #[error("This log file is empty.")]
    EmptyFile,

    /// The file produced no content despite a non-zero size, e.g. truncated
    /// between stat and read.
    #[error("Could not read from file at path {}", .path.display())]
    ReadFailed { path: PathBuf },

    /// Any other I/O failure mid-read; the message carries the error text
    /// and the path.
    #[error("{} {}", .source, .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read-side viewer over the base log directory.
///
/// The directory path is fixed at construction from the injected layout.
#[derive(Clone, Debug)]
pub struct LogReader {
    log_dir: PathBuf,
}

impl LogReader {
    pub fn new(layout: &DirectoryLayout) -> Self {
        Self {
            log_dir: layout.log_dir.clone(),
        }
    }

    /// Absolute path of an enumerated log file.
    pub fn path_for(&self, log: LogFile) -> PathBuf {
        self.log_dir.join(log.file_name())
    }

    /// Read the tail of `log`, capped at [`LOG_SIZE_LIMIT`] bytes.
    ///
    /// Files at or under the limit are returned whole; larger files are
    /// read from `size - LOG_SIZE_LIMIT` to end-of-file, so the result may
    /// start mid-line. Bytes are decoded lossily since the window can also
    /// start mid-codepoint. The handle is released on every exit path.
    ///
    /// # Errors
    ///
    /// All failures are [`LogTailError`] diagnostics; this function never
    /// panics.
    pub fn read_tail(&self, log: LogFile) -> Result<String, LogTailError> {
        self.read_tail_at(&self.path_for(log))
    }

    /// [`LogReader::read_tail`] for a dynamic key, validating it against the
    /// closed enumeration first. Nothing is opened for an invalid key.
    pub fn read_tail_named(&self, key: &str) -> Result<String, LogTailError> {
        let log: LogFile = key.parse()?;
        self.read_tail(log)
    }

    /// Render either the tail content or its diagnostic as one string for
    /// direct display; never panics.
    pub fn tail_or_diagnostic(&self, key: &str) -> String {
        match self.read_tail_named(key) {
            Ok(content) => content,
            Err(diagnostic) => diagnostic.to_string(),
        }
    }

    fn read_tail_at(&self, path: &Path) -> Result<String, LogTailError> {
        let mut file = File::open(path).map_err(|source| LogTailError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| LogTailError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        if size == 0 {
            return Err(LogTailError::EmptyFile);
        }

        // Keep only the final window of an oversized log.
        if size > LOG_SIZE_LIMIT {
            file.seek(SeekFrom::End(-(LOG_SIZE_LIMIT as i64)))
                .map_err(|source| LogTailError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        let mut buf = Vec::with_capacity(size.min(LOG_SIZE_LIMIT) as usize);
        file.read_to_end(&mut buf)
            .map_err(|source| LogTailError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        // A non-zero stat size with no bytes read means the file was
        // truncated between stat and read.
        if buf.is_empty() {
            return Err(LogTailError::ReadFailed {
                path: path.to_path_buf(),
            });
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{LOG_SIZE_LIMIT, LogReader, LogTailError};
    use crate::models::layout::DirectoryLayout;
    use crate::models::log_file::LogFile;

    fn reader_in(tmp: &TempDir) -> LogReader {
        let layout = DirectoryLayout::new(tmp.path().join("var"), tmp.path().join("log"));
        fs::create_dir_all(tmp.path().join("log")).unwrap();
        LogReader::new(&layout)
    }

    #[test]
    fn every_valid_key_maps_to_its_log_file() {
        let tmp = TempDir::new().unwrap();
        let reader = reader_in(&tmp);

        for log in LogFile::ALL {
            fs::write(reader.path_for(log), format!("{} line\n", log.key())).unwrap();
            let content = reader.read_tail_named(log.key()).unwrap();
            assert_eq!(content, format!("{} line\n", log.key()));
        }
    }

    // An unknown key is rejected before any file is opened; the diagnostic
    // names the offending key.
    #[test]
    fn invalid_key_yields_a_diagnostic_naming_the_key() {
        let tmp = TempDir::new().unwrap();
        let reader = reader_in(&tmp);

        let err = reader.read_tail_named("access").unwrap_err();

        assert!(matches!(err, LogTailError::InvalidKey(_)));
        assert_eq!(
            err.to_string(),
            "Log file is not valid. Log file name is access"
        );
    }

    #[test]
    fn missing_file_yields_an_open_diagnostic_containing_the_path() {
        let tmp = TempDir::new().unwrap();
        let reader = reader_in(&tmp);

        let err = reader.read_tail(LogFile::Debug).unwrap_err();

        assert!(matches!(err, LogTailError::OpenFailed { .. }));
        assert!(err.to_string().contains("debug.log"));
    }

    #[test]
    fn empty_file_yields_the_literal_empty_diagnostic() {
        let tmp = TempDir::new().unwrap();
        let reader = reader_in(&tmp);
        fs::write(reader.path_for(LogFile::System), b"").unwrap();

        let err = reader.read_tail(LogFile::System).unwrap_err();

        assert_eq!(err.to_string(), "This log file is empty.");
    }

    #[test]
    fn small_file_is_returned_whole() {
        let tmp = TempDir::new().unwrap();
        let reader = reader_in(&tmp);
        fs::write(reader.path_for(LogFile::Connector), b"one\ntwo\n").unwrap();

        let content = reader.read_tail(LogFile::Connector).unwrap();

        assert_eq!(content, "one\ntwo\n");
    }

    // Oversized logs return exactly the final LOG_SIZE_LIMIT bytes, which
    // may begin mid-line.
    #[test]
    fn oversized_file_is_capped_to_its_final_bytes() {
        let tmp = TempDir::new().unwrap();
        let reader = reader_in(&tmp);

        // 60,000 ten-byte lines: 600,000 bytes total.
        let mut body = String::with_capacity(600_000);
        for i in 0..60_000 {
            body.push_str(&format!("{i:09}\n"));
        }
        fs::write(reader.path_for(LogFile::Exception), &body).unwrap();

        let content = reader.read_tail(LogFile::Exception).unwrap();

        assert_eq!(content.len() as u64, LOG_SIZE_LIMIT);
        assert_eq!(content, &body[body.len() - LOG_SIZE_LIMIT as usize..]);
    }

    #[test]
    fn tail_or_diagnostic_renders_both_regimes_as_strings() {
        let tmp = TempDir::new().unwrap();
        let reader = reader_in(&tmp);
        fs::write(reader.path_for(LogFile::Connector), b"hello\n").unwrap();

        assert_eq!(reader.tail_or_diagnostic("connector"), "hello\n");
        assert_eq!(
            reader.tail_or_diagnostic("bogus"),
            "Log file is not valid. Log file name is bogus"
        );
    }
}
