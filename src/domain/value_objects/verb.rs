//! Verbs and listings at the peer boundary

use std::fmt;

use serde::Serialize;

/// Mutating operation issued against a peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Make a package available on one peer
    Install,
    /// Activate a chaincode on a channel for the first time
    Instantiate,
    /// Replace the active version on a channel
    Upgrade,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Install => "install",
            Verb::Instantiate => "instantiate",
            Verb::Upgrade => "upgrade",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which inventory a read-only query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Listing {
    Installed,
    Instantiated,
}

impl Listing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Listing::Installed => "installed",
            Listing::Instantiated => "instantiated",
        }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
