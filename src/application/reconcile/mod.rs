//! Reconcile Use Case
//!
//! Brings peers in line with the manifest:
//! - Fetching sources (optional)
//! - Loading and expanding the manifest
//! - Probing deployed state and planning the three batches
//! - Running compile, install and instantiate batches in order

mod options;
mod result;
mod use_case;

pub use options::ReconcileOptions;
pub use result::{ReconcileResult, StageReport};
pub use use_case::ReconcileUseCase;
