// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Shared filesystem helpers reused by the lifecycle logic.

pub mod fs;

/// Idempotent directory provisioning with the fixed deployment mode.
pub use fs::ensure_dir;
/// Compute the SHA-256 hash of a file.
pub use fs::hash_file;
/// Atomic move with a verified cross-device fallback.
pub use fs::move_file;
