// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Externally supplied base directories the export tree hangs off.
//!
//! The layout is injected once at construction and treated as immutable
//! configuration; the store never recomputes or rediscovers paths per call.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Base directories for the export tree and the application logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryLayout {
    /// Base variable directory; the export tree lives at
    /// `<var_dir>/export/email`.
    pub var_dir: PathBuf,
    /// Directory holding the enumerated application log files.
    pub log_dir: PathBuf,
}

impl DirectoryLayout {
    pub fn new(var_dir: impl Into<PathBuf>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            var_dir: var_dir.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Active output area: `<var>/export/email`.
    pub fn output_dir(&self) -> PathBuf {
        self.var_dir.join("export").join("email")
    }

    /// Archive area: `<var>/export/email/archive`.
    ///
    /// Invariant: the archive is nested inside the output area. The
    /// location-fallback logic breaks if this nesting is ever reversed.
    pub fn archive_dir(&self) -> PathBuf {
        self.output_dir().join("archive")
    }

}
