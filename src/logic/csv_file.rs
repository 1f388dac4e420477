// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! CSV artifact I/O: append rows to an export file and read back the email
//! column for consent cleanup. Encoding mechanics are delegated to the `csv`
//! codec (comma delimiter, double-quote quoting).

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::Path;

use crate::error::FilesystemError;

/// Append a single row to a CSV artifact, creating the file when missing.
///
/// The file is opened for appending with the pointer at the end, so repeated
/// calls accumulate rows.
///
/// # Errors
///
/// Returns [`FilesystemError::CsvWrite`] when the file cannot be opened or
/// the row cannot be encoded and flushed.
pub fn append_row<I, T>(path: &Path, row: I) -> Result<(), FilesystemError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| FilesystemError::CsvWrite {
            path: path.to_path_buf(),
            source: csv::Error::from(source),
        })?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .from_writer(file);
    writer
        .write_record(row)
        .and_then(|()| writer.flush().map_err(csv::Error::from))
        .map_err(|source| FilesystemError::CsvWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Collect the values of column 0 from a CSV artifact, excluding the literal
/// header value `Email` and de-duplicating while preserving first-seen order.
///
/// # Errors
///
/// Returns the codec's error when the file cannot be opened or a row cannot
/// be decoded; callers in the diagnostic regime render it as a string.
pub fn read_email_column(path: &Path) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut seen = HashSet::new();
    let mut emails = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(value) = record.get(0) else {
            continue;
        };
        // The header row carries the literal "Email" in column 0.
        if value == "Email" {
            continue;
        }
        if seen.insert(value.to_string()) {
            emails.push(value.to_string());
        }
    }
    Ok(emails)
}
