//! Desired-state loader
//!
//! Flattens manifest entries into one [`DeploymentTarget`] per
//! (chaincode, network config, peer), in manifest order. Pure transform: the
//! files themselves are read by a [`ManifestRepository`](crate::domain::ports::ManifestRepository).

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::entities::{ChaincodeEntry, DeploymentTarget};
use crate::domain::value_objects::Language;
use crate::error::{CcsyncError, CcsyncResult};

/// Prefix golang sources live under, relative to `$GOPATH/src`
const GOLANG_SOURCE_PREFIX: &str = "chaincodes";

/// Turns manifest entries into deployment targets
#[derive(Debug, Clone)]
pub struct DesiredStateLoader {
    /// Absolute directory the manifest's chaincode directories are relative to
    chaincode_root: PathBuf,
}

impl DesiredStateLoader {
    pub fn new(chaincode_root: impl Into<PathBuf>) -> Self {
        Self {
            chaincode_root: chaincode_root.into(),
        }
    }

    /// Expand entries into targets.
    ///
    /// Fails on an unknown language tag, or when one chaincode name is declared
    /// with two different languages.
    pub fn expand(&self, entries: &[ChaincodeEntry]) -> CcsyncResult<Vec<DeploymentTarget>> {
        let mut languages: HashMap<&str, Language> = HashMap::new();
        let mut targets = Vec::new();

        for entry in entries {
            let language: Language =
                entry
                    .language
                    .parse()
                    .map_err(|_| CcsyncError::UnknownLanguage {
                        chaincode: entry.name.clone(),
                        language: entry.language.clone(),
                    })?;

            if let Some(previous) = languages.insert(entry.name.as_str(), language) {
                if previous != language {
                    return Err(CcsyncError::LanguageConflict {
                        chaincode: entry.name.clone(),
                        first: previous.to_string(),
                        second: language.to_string(),
                    });
                }
            }

            let path = self.source_path(&entry.dir, language);

            for network in &entry.networks {
                for peer in &network.peers {
                    targets.push(DeploymentTarget {
                        name: entry.name.clone(),
                        version: entry.version.clone(),
                        path: path.clone(),
                        language,
                        channel: network.channel_id.clone(),
                        peer: peer.clone(),
                        policy: network.endorsement_policy.clone(),
                        instantiate_args: network.instantiate_args.clone(),
                        orderer: network.orderer.clone(),
                    });
                }
            }
        }

        Ok(targets)
    }

    /// Path as the peer CLI expects it: absolute for node, GOPATH-relative for golang
    fn source_path(&self, dir: &str, language: Language) -> String {
        let dir = dir.trim_start_matches("./").trim_end_matches('/');
        match language {
            Language::Node => self.chaincode_root.join(dir).display().to_string(),
            Language::Golang => format!("{GOLANG_SOURCE_PREFIX}/{dir}"),
        }
    }
}
