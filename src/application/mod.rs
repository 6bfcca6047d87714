//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ReconcileUseCase` - fetch, load, probe, plan and run the compile/install/instantiate stages
//! - `CleanUseCase` - remove stale chaincode containers and images
//! - `merge_dependencies` - merge one package.json's dependencies into another

pub mod clean;
pub mod merge_deps;
pub mod reconcile;

pub use clean::{CleanOptions, CleanResult, CleanUseCase, FailedRemoval, StaleArtifact};
pub use merge_deps::{merge_dependencies, MergeResult};
pub use reconcile::{ReconcileOptions, ReconcileResult, ReconcileUseCase, StageReport};
