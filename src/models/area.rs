// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 exportstore developers

//! Storage areas and the artifact lifecycle states derived from them.

/// The two directory areas an export artifact can sit in.
///
/// `Archive` is always a subdirectory of the active output area; the
/// location-fallback logic in the store relies on that nesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactArea {
    /// The active output area new exports are written to.
    Active,
    /// The archive area completed exports are moved into.
    Archive,
}

/// Lifecycle state of a named artifact, derived from existence checks.
///
/// Querying the state of a missing artifact is not an error; the only
/// supported transition is `Active` to `Archived`, performed by
/// [`crate::logic::store::ExportStore::archive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactState {
    /// Present in neither area.
    Nonexistent,
    /// Present in the active output area.
    Active,
    /// Present in the archive area only.
    Archived,
}

impl ArtifactState {
    /// String form used by the CLI and log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactState::Nonexistent => "nonexistent",
            ArtifactState::Active => "active",
            ArtifactState::Archived => "archived",
        }
    }
}
