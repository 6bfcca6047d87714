//! Stale runtime artifacts
//!
//! Peers start one container (and build one image) per chaincode version they
//! run, named `dev-<peer>-<chaincode>-<version>...`. Old versions are never
//! cleaned up by the platform. Given names ordered newest first, everything
//! but the newest artifact per (peer, chaincode) is stale.

use std::collections::HashSet;
use std::hash::Hash;

const DEV_PREFIX: &str = "dev-";

/// Peer and chaincode encoded in a chaincode container/image name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName<'a> {
    pub peer: &'a str,
    pub chaincode: &'a str,
}

impl<'a> ArtifactName<'a> {
    /// Parse `dev-<peer>-<chaincode>-...`. Names with fewer segments are not ours.
    ///
    /// Peers and chaincodes containing `-` are ambiguous in this scheme and are
    /// split at the first dashes.
    pub fn parse(name: &'a str) -> Option<Self> {
        let rest = name.strip_prefix(DEV_PREFIX)?;
        let mut parts = rest.split('-');
        let peer = parts.next().filter(|p| !p.is_empty())?;
        let chaincode = parts.next().filter(|c| !c.is_empty())?;
        Some(Self { peer, chaincode })
    }
}

/// Keep the first item per key and return the rest, preserving input order.
///
/// Items without a key are never returned.
pub fn keep_first_per_key<'a, T, K, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> Option<K>,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| match key(*item) {
            Some(k) => !seen.insert(k),
            None => false,
        })
        .collect()
}

/// Names of stale artifacts among `names` (newest first)
pub fn stale_artifacts(names: &[String]) -> Vec<String> {
    keep_first_per_key(names, |name| ArtifactName::parse(name))
        .into_iter()
        .cloned()
        .collect()
}
