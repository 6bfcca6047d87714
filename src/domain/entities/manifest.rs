//! Raw manifest documents
//!
//! What the manifest repository reads from disk, before normalisation into
//! [`DeploymentTarget`](super::DeploymentTarget)s.

use std::path::PathBuf;

use super::target::OrdererEndpoint;

/// One chaincode package as declared in its `package.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeEntry {
    /// Directory as listed in the index (relative to the chaincode root)
    pub dir: String,
    /// File the entry was read from (for error messages)
    pub origin: PathBuf,
    pub name: String,
    pub version: String,
    /// Unvalidated `hf-language` tag
    pub language: String,
    pub networks: Vec<NetworkConfig>,
}

/// One `hf-network` element: where and how to deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub channel_id: String,
    pub orderer: OrdererEndpoint,
    pub peers: Vec<String>,
    pub instantiate_args: Vec<String>,
    pub endorsement_policy: Option<String>,
}
