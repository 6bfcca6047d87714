//! DeploymentTarget entity
//!
//! One (chaincode, channel, peer) tuple to reconcile. Built by the desired-state
//! loader and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Language;

/// Ordering service a peer talks to when proposing lifecycle transactions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrdererEndpoint {
    pub host: String,
    pub port: u16,
    /// Organisation owning the orderer (locates its TLS CA)
    pub org: String,
}

impl OrdererEndpoint {
    /// `host:port` as passed to `--orderer`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Desired deployment of one chaincode on one peer of one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentTarget {
    pub name: String,
    /// Opaque; compared for equality only
    pub version: String,
    /// Source path as the peer CLI expects it (absolute for node, GOPATH-relative for golang)
    pub path: String,
    pub language: Language,
    pub channel: String,
    pub peer: String,
    pub policy: Option<String>,
    pub instantiate_args: Vec<String>,
    pub orderer: OrdererEndpoint,
}

impl DeploymentTarget {
    /// Human-readable description used in outcome messages
    pub fn info(&self) -> String {
        format!(
            "chaincode {} version {} at {}",
            self.name, self.version, self.path
        )
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} on {}/{}",
            self.name, self.version, self.channel, self.peer
        )
    }
}
