//! Container Runtime Port
//!
//! Lists and removes the chaincode containers and images peers leave behind.

use std::fmt;

use thiserror::Error;

/// Kind of runtime artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Container,
    Image,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Container => f.write_str("container"),
            ArtifactKind::Image => f.write_str("image"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{command}: {message}")]
pub struct RuntimeError {
    pub command: String,
    pub message: String,
}

/// Container engine operations used by the stale-artifact cleaner
pub trait ContainerRuntime {
    /// Artifact names, most recent first
    fn list(&self, kind: ArtifactKind) -> Result<Vec<String>, RuntimeError>;

    /// Remove one artifact by name
    fn remove(&self, kind: ArtifactKind, name: &str) -> Result<(), RuntimeError>;
}
