//! ccsync - chaincode deployment reconciliation for Hyperledger Fabric
//!
//! ccsync reads a declarative chaincode manifest, probes each peer for what is
//! installed and instantiated, and runs only the compile, install and
//! instantiate/upgrade steps needed to close the gap.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use error::{CcsyncError, CcsyncResult, ErrorKind};
