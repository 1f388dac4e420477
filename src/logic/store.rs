// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Two-stage lifecycle store for export artifacts.
//!
//! Responsibilities:
//! - Provision the active output and archive areas on demand (idempotent).
//! - Resolve a filename to its current location with archive fallback.
//! - Move completed artifacts from the active area into the archive.
//! - Guarded recursive deletion limited to the var directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::FilesystemError;
use crate::models::area::{ArtifactArea, ArtifactState};
use crate::models::layout::DirectoryLayout;
use crate::utils::{ensure_dir, move_file};

/// Lifecycle manager for the `<var>/export/email` artifact tree.
///
/// The area paths are computed once at construction from the injected
/// [`DirectoryLayout`] and held immutably for the store's lifetime. No
/// directory-existence result is cached: every provisioning call is
/// independently idempotent.
#[derive(Clone, Debug)]
pub struct ExportStore {
    var_dir: PathBuf,
    output_dir: PathBuf,
    archive_dir: PathBuf,
}

impl ExportStore {
    pub fn new(layout: &DirectoryLayout) -> Self {
        Self {
            var_dir: layout.var_dir.clone(),
            output_dir: layout.output_dir(),
            archive_dir: layout.archive_dir(),
        }
    }

    /// Ensure and return the active output area.
    ///
    /// # Errors
    ///
    /// Propagates [`FilesystemError::CreateDir`] when provisioning fails.
    pub fn output_dir(&self) -> Result<&Path, FilesystemError> {
        ensure_dir(&self.output_dir)?;
        Ok(&self.output_dir)
    }

    /// Ensure and return the archive area.
    ///
    /// # Errors
    ///
    /// Propagates [`FilesystemError::CreateDir`] when provisioning fails.
    pub fn archive_dir(&self) -> Result<&Path, FilesystemError> {
        ensure_dir(&self.archive_dir)?;
        Ok(&self.archive_dir)
    }

    /// Pure path join of an area directory and `filename`; touches no
    /// filesystem state.
    pub fn path_for(&self, filename: &str, area: ArtifactArea) -> PathBuf {
        match area {
            ArtifactArea::Active => self.output_dir.join(filename),
            ArtifactArea::Archive => self.archive_dir.join(filename),
        }
    }

    /// Resolve `filename` to wherever it currently lives, provisioning both
    /// areas as a side effect.
    ///
    /// Returns the active path if a file of that name exists there, and the
    /// archive path otherwise — including when the file exists in *neither*
    /// area. A non-error return is not proof of existence; callers needing a
    /// definite answer must use [`ExportStore::exists`].
    ///
    /// # Errors
    ///
    /// Propagates [`FilesystemError::CreateDir`] when provisioning fails.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, FilesystemError> {
        self.output_dir()?;
        self.archive_dir()?;
        let active = self.path_for(filename, ArtifactArea::Active);
        if active.is_file() {
            Ok(active)
        } else {
            Ok(self.path_for(filename, ArtifactArea::Archive))
        }
    }

    /// True when `filename` is present in the active area or the archive,
    /// checked in that order.
    pub fn exists(&self, filename: &str) -> bool {
        self.path_for(filename, ArtifactArea::Active).is_file()
            || self.path_for(filename, ArtifactArea::Archive).is_file()
    }

    /// True only when `filename` is present in the archive area; the active
    /// area is not consulted.
    pub fn is_archived(&self, filename: &str) -> bool {
        self.path_for(filename, ArtifactArea::Archive).is_file()
    }

    /// Lifecycle state of `filename`. The active area wins when the name is
    /// present in both.
    pub fn state(&self, filename: &str) -> ArtifactState {
        if self.path_for(filename, ArtifactArea::Active).is_file() {
            ArtifactState::Active
        } else if self.is_archived(filename) {
            ArtifactState::Archived
        } else {
            ArtifactState::Nonexistent
        }
    }

    /// Move `filename` from the active area into the archive and return its
    /// new path.
    ///
    /// The archive directory is provisioned first; the move itself is an
    /// atomic rename (with a verified copy+delete fallback across devices).
    ///
    /// # Errors
    ///
    /// Propagates [`FilesystemError::Move`] when the source does not exist
    /// in the active area — including when a second archiver already won the
    /// race for the same filename.
    pub fn archive(&self, filename: &str) -> Result<PathBuf, FilesystemError> {
        let source = self.path_for(filename, ArtifactArea::Active);
        self.archive_dir()?;
        let dest = self.path_for(filename, ArtifactArea::Archive);
        move_file(&source, &dest)?;
        info!(file = filename, to = %dest.display(), "archived export artifact");
        Ok(dest)
    }

    /// Recursively delete a directory, refusing to act on any path outside
    /// the base var directory.
    ///
    /// # Errors
    ///
    /// Returns [`FilesystemError::OutsideVarRoot`] without touching the
    /// filesystem when `path` is not contained in the var directory, and
    /// [`FilesystemError::DeleteDir`] when the removal itself fails.
    pub fn delete_dir(&self, path: &Path) -> Result<(), FilesystemError> {
        if !path.starts_with(&self.var_dir) {
            return Err(FilesystemError::OutsideVarRoot {
                path: path.to_path_buf(),
                var_root: self.var_dir.clone(),
            });
        }
        std::fs::remove_dir_all(path).map_err(|source| FilesystemError::DeleteDir {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "deleted directory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::ExportStore;
    use crate::error::FilesystemError;
    use crate::models::area::{ArtifactArea, ArtifactState};
    use crate::models::layout::DirectoryLayout;

    fn store_in(tmp: &TempDir) -> ExportStore {
        let layout = DirectoryLayout::new(tmp.path().join("var"), tmp.path().join("log"));
        ExportStore::new(&layout)
    }

    #[test]
    fn area_getters_provision_their_directories() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let output = store.output_dir().unwrap().to_path_buf();
        let archive = store.archive_dir().unwrap().to_path_buf();

        assert!(output.is_dir());
        assert!(archive.is_dir());
        assert!(archive.starts_with(&output));
    }

    #[test]
    fn path_for_joins_without_touching_the_filesystem() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let active = store.path_for("export_1.csv", ArtifactArea::Active);
        let archived = store.path_for("export_1.csv", ArtifactArea::Archive);

        assert!(active.ends_with("export/email/export_1.csv"));
        assert!(archived.ends_with("export/email/archive/export_1.csv"));
        // Pure join: nothing was provisioned.
        assert!(!active.parent().unwrap().exists());
    }

    #[test]
    fn archive_moves_the_artifact_exclusively() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let active = store.output_dir().unwrap().join("export_1.csv");
        fs::write(&active, b"Email\na@x.com\n").unwrap();

        let dest = store.archive("export_1.csv").unwrap();

        assert!(!active.exists());
        assert!(dest.is_file());
        assert!(store.is_archived("export_1.csv"));
        assert_eq!(store.state("export_1.csv"), ArtifactState::Archived);
    }

    // Archiving the same name twice must fail: the source is gone.
    #[test]
    fn second_archive_of_the_same_name_fails() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        fs::write(store.output_dir().unwrap().join("export_1.csv"), b"x").unwrap();

        store.archive("export_1.csv").unwrap();
        let err = store.archive("export_1.csv").unwrap_err();

        assert!(matches!(err, FilesystemError::Move { .. }));
    }

    #[test]
    fn resolve_prefers_the_active_area() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        fs::write(store.output_dir().unwrap().join("a.csv"), b"active").unwrap();
        fs::write(store.archive_dir().unwrap().join("a.csv"), b"archived").unwrap();

        let resolved = store.resolve("a.csv").unwrap();

        assert_eq!(resolved, store.path_for("a.csv", ArtifactArea::Active));
        assert_eq!(store.state("a.csv"), ArtifactState::Active);
    }

    #[test]
    fn resolve_falls_back_to_the_archive_when_not_active() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        fs::write(store.archive_dir().unwrap().join("a.csv"), b"archived").unwrap();

        let resolved = store.resolve("a.csv").unwrap();

        assert_eq!(resolved, store.path_for("a.csv", ArtifactArea::Archive));
        assert!(store.exists("a.csv"));
    }

    // Intentional, documented quirk: resolve returns the archive path even
    // when the file exists in neither area. It is a resolved-path function,
    // not an existence guarantee.
    #[test]
    fn resolve_returns_the_archive_path_for_a_file_that_exists_nowhere() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let resolved = store.resolve("ghost.csv").unwrap();

        assert_eq!(resolved, store.path_for("ghost.csv", ArtifactArea::Archive));
        assert!(!store.exists("ghost.csv"));
        assert_eq!(store.state("ghost.csv"), ArtifactState::Nonexistent);
    }

    #[test]
    fn delete_dir_refuses_paths_outside_the_var_directory() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let outside = tmp.path().join("elsewhere");
        fs::create_dir_all(&outside).unwrap();

        let err = store.delete_dir(&outside).unwrap_err();

        assert!(matches!(err, FilesystemError::OutsideVarRoot { .. }));
        assert!(err.to_string().contains("Failed to delete directory"));
        // Refusal performs no filesystem mutation.
        assert!(outside.is_dir());
    }

    #[test]
    fn delete_dir_removes_directories_inside_the_var_directory() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let doomed = store.output_dir().unwrap().join("scratch");
        fs::create_dir_all(&doomed).unwrap();

        store.delete_dir(&doomed).unwrap();

        assert!(!doomed.exists());
    }

    // End-to-end: produce an active artifact, archive it, and resolve it at
    // its new location.
    #[test]
    fn end_to_end_archive_then_resolve() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let active = store.output_dir().unwrap().join("export_1.csv");
        fs::write(&active, b"Email\na@x.com\n").unwrap();

        store.archive("export_1.csv").unwrap();
        let resolved = store.resolve("export_1.csv").unwrap();

        assert_eq!(
            resolved,
            store.path_for("export_1.csv", ArtifactArea::Archive)
        );
        assert!(resolved.is_file());
        assert!(!active.exists());
    }
}
