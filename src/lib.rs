// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Lifecycle management for batch CSV export artifacts.
//!
//! Responsibilities:
//! - Provision the active output and archive areas on demand, with the
//!   deployment's fixed directory mode.
//! - Move completed artifacts into the archive and resolve them later from
//!   either area (archive fallback).
//! - Bounded tail reads over the application's enumerated log files.
//! - Correlate exported consent CSVs against the consent store to purge
//!   already-processed records.
//!
//! Two failure regimes coexist deliberately: filesystem mutations surface a
//! typed [`FilesystemError`] the caller must react to, while the read-side
//! helpers ([`LogReader`], [`clean_processed_consent`]) report every failure
//! as a displayable value and never panic.

pub mod error;
pub mod logic;
pub mod models;
pub mod utils;

pub use error::FilesystemError;
pub use logic::consent::{CleanupOutcome, ConsentStore, clean_processed_consent};
pub use logic::csv_file::{append_row, read_email_column};
pub use logic::logs::{LOG_SIZE_LIMIT, LogReader, LogTailError};
pub use logic::store::ExportStore;
pub use models::area::{ArtifactArea, ArtifactState};
pub use models::layout::DirectoryLayout;
pub use models::log_file::{InvalidLogKey, LogFile};
