//! Clean Use Case
//!
//! Peers start a container (and build an image) for every chaincode version
//! they run and never remove the old ones. This use case:
//! - Lists chaincode containers and images
//! - Keeps the newest per (peer, chaincode)
//! - Removes the rest

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::{CleanResult, FailedRemoval, StaleArtifact};
pub use use_case::CleanUseCase;
