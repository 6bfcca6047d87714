//! Build Port
//!
//! Produces deployable artifacts from chaincode sources.

use thiserror::Error;

use crate::domain::entities::DeploymentTarget;

/// Error raised by the build toolchain
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("could not start `{command}`: {message}")]
    Spawn { command: String, message: String },
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Language-specific build steps
pub trait ChaincodeBuilder: Send + Sync {
    /// Compile an ahead-of-time language target
    fn compile(&self, target: &DeploymentTarget) -> Result<(), BuildError>;

    /// Install runtime dependencies of an interpreted target
    fn install_dependencies(&self, target: &DeploymentTarget) -> Result<(), BuildError>;

    /// Whether a previous dependency install left its marker behind
    fn has_dependencies(&self, target: &DeploymentTarget) -> bool;
}

/// Fetches chaincode sources before the manifest is read
pub trait SourceFetcher {
    /// Pull `repository` into the chaincode base path, then install (and optionally build) it
    fn fetch(&self, repository: &str, build: bool) -> Result<(), BuildError>;
}
