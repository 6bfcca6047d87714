//! Clean Use Case
//!
//! Removes chaincode containers and images left behind by older versions.

use crate::domain::ports::{ArtifactKind, ContainerRuntime};
use crate::domain::services::{stale_artifacts, ArtifactName};
use crate::error::{CcsyncError, CcsyncResult};

use super::options::CleanOptions;
use super::result::{CleanResult, FailedRemoval, StaleArtifact};

/// Clean use case - removes all but the newest artifact per (peer, chaincode)
pub struct CleanUseCase<CR>
where
    CR: ContainerRuntime,
{
    runtime: CR,
}

impl<CR> CleanUseCase<CR>
where
    CR: ContainerRuntime,
{
    /// Create a new clean use case
    pub fn new(runtime: CR) -> Self {
        Self { runtime }
    }

    /// Execute the clean operation.
    ///
    /// Listing failures abort; a failed removal is recorded and the rest
    /// continue.
    pub fn execute(&self, options: &CleanOptions) -> CcsyncResult<CleanResult> {
        let mut result = CleanResult::new();

        for kind in [ArtifactKind::Container, ArtifactKind::Image] {
            let names = self
                .runtime
                .list(kind)
                .map_err(|e| CcsyncError::action("list", format!("{kind}s"), e))?;
            let ours = names
                .iter()
                .filter(|name| ArtifactName::parse(name).is_some())
                .count();
            let stale = stale_artifacts(&names);
            result.kept += ours - stale.len();

            for name in stale {
                let artifact = StaleArtifact::new(kind, name);
                if options.dry_run {
                    result.removed.push(artifact);
                    continue;
                }
                match self.runtime.remove(kind, &artifact.name) {
                    Ok(()) => {
                        tracing::info!(%kind, name = %artifact.name, "removed");
                        result.removed.push(artifact);
                    }
                    Err(e) => {
                        tracing::warn!(%kind, name = %artifact.name, error = %e, "removal failed");
                        result.errors.push(FailedRemoval {
                            artifact,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        Ok(result)
    }
}
