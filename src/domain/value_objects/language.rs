//! Language value object - the closed set of chaincode runtimes
//!
//! - `Golang`: compiled ahead of time by the build toolchain
//! - `Node`: interpreted; "compiling" means installing npm dependencies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chaincode language as understood by `peer chaincode --lang`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Go chaincode, compiled
    Golang,
    /// Node.js chaincode, interpreted
    Node,
}

impl Language {
    /// Tag used in manifests and on the peer CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Golang => "golang",
            Language::Node => "node",
        }
    }

    /// Returns true for languages that need an ahead-of-time build
    pub fn is_compiled(&self) -> bool {
        matches!(self, Language::Golang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a tag outside the supported set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golang" => Ok(Language::Golang),
            "node" => Ok(Language::Node),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}
