//! Domain Services
//!
//! The reconciliation engine: loading, probing, planning, bounded execution
//! and the mutating primitives. Services only talk to the outside world
//! through the ports in [`crate::domain::ports`].

mod actions;
mod executor;
mod loader;
mod planner;
mod prober;
mod stale;

#[cfg(test)]
pub(crate) mod testing;

pub use actions::ActionPrimitives;
pub use executor::{BoundedExecutor, DEFAULT_CONCURRENCY};
pub use loader::DesiredStateLoader;
pub use planner::ActionPlanner;
pub use prober::StateProber;
pub use stale::{keep_first_per_key, stale_artifacts, ArtifactName};
