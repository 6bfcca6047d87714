//! Domain Entities
//!
//! Core data carried through a reconciliation run. All of them are transient:
//! nothing here is persisted between runs.

mod inventory;
mod manifest;
mod outcome;
mod plan;
pub(crate) mod target;

pub use inventory::{InventoryRecord, ProbeResult};
pub use manifest::{ChaincodeEntry, NetworkConfig};
pub use outcome::{ActionOutcome, TaskReport};
pub use plan::{ActionPlan, Stage};
pub use target::{DeploymentTarget, OrdererEndpoint};
