// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Filesystem primitives shared by the lifecycle logic.
//!
//! Responsibilities:
//! - Idempotent directory provisioning with the deployment's fixed mode.
//! - Atomic file moves, with a verified copy+delete fallback when source and
//!   destination sit on different filesystems.
//! - SHA-256 hashing used to verify that fallback.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::FilesystemError;

/// Permission mode for every directory this crate creates: owner rwx,
/// group rx, others none. Must stay bit-for-bit `0o750` for the deployment
/// environment.
pub const DIR_MODE: u32 = 0o750;

/// Create `path` (and any missing ancestors) if it is not already a
/// directory. Idempotent: calling it on an existing directory is a no-op.
///
/// # Errors
///
/// Returns [`FilesystemError::CreateDir`] when creation fails, including
/// when `path` collides with an existing non-directory file.
pub fn ensure_dir(path: &Path) -> Result<(), FilesystemError> {
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(path)
        .map_err(|source| FilesystemError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "created directory");
    Ok(())
}

/// Move `from` to `to`, preferring an atomic rename.
///
/// When the rename fails because source and destination are on different
/// filesystems, fall back to copy + checksum verification + source removal.
/// The source is only deleted once a full, verified copy exists at the
/// destination, so no failure mode leaves a truncated destination as the
/// only copy.
///
/// # Errors
///
/// Returns [`FilesystemError::Move`] when the source is missing (including
/// after losing an archive race) or the move itself fails, and
/// [`FilesystemError::CopyVerify`] when the fallback copy does not match
/// the source.
pub fn move_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            warn!(
                from = %from.display(),
                to = %to.display(),
                "rename crossed devices, falling back to copy"
            );
            let source_hash = hash_file(from)?;
            fs::copy(from, to).map_err(|source| FilesystemError::Move {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })?;
            if hash_file(to)? != source_hash {
                // Keep the intact source; discard the bad copy.
                let _ = fs::remove_file(to);
                return Err(FilesystemError::CopyVerify {
                    from: from.to_path_buf(),
                    to: to.to_path_buf(),
                });
            }
            fs::remove_file(from).map_err(|source| FilesystemError::Move {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(FilesystemError::Move {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        }),
    }
}

/// Compute the SHA-256 hash of a file and return its lowercase hex digest.
///
/// # Errors
///
/// Returns [`FilesystemError::Read`] when the file cannot be opened or
/// fully read.
pub fn hash_file(path: &Path) -> Result<String, FilesystemError> {
    let mut file = File::open(path).map_err(|source| FilesystemError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|source| FilesystemError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("{:x}", hasher.finalize()))
}
