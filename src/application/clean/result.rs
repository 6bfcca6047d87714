//! Clean result types

use crate::domain::ports::ArtifactKind;

/// A stale container or image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleArtifact {
    pub kind: ArtifactKind,
    pub name: String,
}

impl StaleArtifact {
    pub fn new(kind: ArtifactKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// An artifact that could not be removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRemoval {
    pub artifact: StaleArtifact,
    pub message: String,
}

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Artifacts removed (or that would be removed in dry run)
    pub removed: Vec<StaleArtifact>,
    /// Number of chaincode artifacts kept as the newest of their kind
    pub kept: usize,
    /// Removals that failed
    pub errors: Vec<FailedRemoval>,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
