// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Consent cleanup: correlate a previously exported consent CSV against the
//! consent store and purge the records it already processed.
//!
//! Like the log viewer, this is a report-facing helper: every outcome is a
//! displayable value and the operation never panics.

use std::fmt;
use std::path::Path;

use email_address::EmailAddress;
use tracing::{info, warn};

use crate::logic::csv_file::read_email_column;

/// External consent store collaborator.
///
/// Accepts an ordered batch of email addresses and reports the identifiers
/// it actually deleted; only the count matters to this crate.
pub trait ConsentStore {
    fn delete_by_emails(&self, emails: &[String]) -> anyhow::Result<Vec<String>>;
}

/// Outcome of a consent cleanup run, rendered directly into reports.
#[derive(Debug)]
pub enum CleanupOutcome {
    /// The store deleted this many consent records.
    Removed(usize),
    /// The batch ran but nothing was deleted.
    NothingRemoved,
    /// The CSV artifact could not be decoded.
    DecodeFailed(String),
    /// The consent store rejected the batch; carries its error text.
    DeletionFailed(String),
}

impl CleanupOutcome {
    /// True for the outcomes that removed at least one record.
    pub fn removed_any(&self) -> bool {
        matches!(self, CleanupOutcome::Removed(_))
    }
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupOutcome::Removed(count) => write!(f, "Consent data removed : {count}"),
            CleanupOutcome::NothingRemoved => write!(f, "No consent data removed"),
            CleanupOutcome::DecodeFailed(msg) | CleanupOutcome::DeletionFailed(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

/// Read the email column of the CSV at `csv_path` (header excluded,
/// first-seen order, de-duplicated) and submit it to the consent store as
/// one batch.
///
/// Partial deletion is not distinguished from full success: only the count
/// reported by the store is surfaced. Values that do not parse as email
/// addresses are logged and forwarded unchanged; the store is the authority
/// on what matches.
pub fn clean_processed_consent(store: &dyn ConsentStore, csv_path: &Path) -> CleanupOutcome {
    let emails = match read_email_column(csv_path) {
        Ok(emails) => emails,
        Err(err) => return CleanupOutcome::DecodeFailed(err.to_string()),
    };

    for value in &emails {
        if !EmailAddress::is_valid(value) {
            warn!(value = %value, "consent CSV value is not a valid email address");
        }
    }

    match store.delete_by_emails(&emails) {
        Ok(deleted) if !deleted.is_empty() => {
            info!(count = deleted.len(), "removed processed consent records");
            CleanupOutcome::Removed(deleted.len())
        }
        Ok(_) => CleanupOutcome::NothingRemoved,
        Err(err) => CleanupOutcome::DeletionFailed(err.to_string()),
    }
}
