//! Peer Gateway Port
//!
//! Read-only inventory queries and lifecycle invocations against a peer.
//! The reconciliation engine only depends on this structured contract; how
//! the binding talks to the peer (CLI, gRPC) is an infrastructure concern.

use thiserror::Error;

use crate::domain::entities::{DeploymentTarget, InventoryRecord};
use crate::domain::value_objects::{Listing, Verb};

/// Error raised by a peer binding
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The peer or the binding's tooling could not be reached
    #[error("connection error: {0}")]
    Unreachable(String),
    /// The call ran but reported failure
    #[error("command `{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    /// The call succeeded but its output could not be understood
    #[error("unexpected output: {0}")]
    Protocol(String),
}

/// Query/mutate capabilities the core requires from a peer
pub trait PeerGateway: Send + Sync {
    /// List chaincodes installed on the target's peer, or instantiated on its channel
    fn query_inventory(
        &self,
        target: &DeploymentTarget,
        listing: Listing,
    ) -> Result<Vec<InventoryRecord>, GatewayError>;

    /// Issue a lifecycle transaction for the target from the target's peer
    fn invoke(&self, target: &DeploymentTarget, verb: Verb) -> Result<(), GatewayError>;
}
