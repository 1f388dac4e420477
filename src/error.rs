// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Typed filesystem errors for the propagating regime.
//!
//! Directory provisioning, archive moves, guarded deletion, and CSV writes
//! are correctness-critical: a failure here must abort the surrounding export
//! run, so these operations surface a [`FilesystemError`] instead of a
//! diagnostic string. The read-side helpers (log tailing, consent cleanup)
//! report their failures as values and never use this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a filesystem operation the caller must react to.
#[derive(Debug, Error)]
pub enum FilesystemError {
    /// Directory creation failed (permissions, disk full, or the path
    /// collides with a non-directory file).
    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rename/move failed; also raised when the archive source is missing,
    /// e.g. after losing a race to another archiver.
    #[error("Failed to move {} to {}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cross-device copy fallback produced a destination whose checksum
    /// does not match the source. The source is left in place.
    #[error("Copy of {} to {} failed checksum verification", .from.display(), .to.display())]
    CopyVerify { from: PathBuf, to: PathBuf },

    /// Refused to delete a path that is not contained in the base var
    /// directory. No filesystem mutation has taken place.
    #[error("Failed to delete directory - '{}': outside the var directory {}", .path.display(), .var_root.display())]
    OutsideVarRoot { path: PathBuf, var_root: PathBuf },

    /// Recursive directory removal failed.
    #[error("Failed to delete directory {}", .path.display())]
    DeleteDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be opened or read for hash verification.
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A CSV row could not be encoded or flushed to an artifact.
    #[error("Failed to write CSV row to {}", .path.display())]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
