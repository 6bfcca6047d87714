//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_CONCURRENCY;
use crate::error::{CcsyncError, CcsyncResult};

use super::loader::{self, ConfigWarning};

/// Reconciliation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Worker threads per batch
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

/// Filesystem locations on the deployment host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Overrides `$GOPATH`
    #[serde(default)]
    pub gopath: Option<PathBuf>,

    #[serde(default = "default_crypto_config")]
    pub crypto_config: PathBuf,

    #[serde(default = "default_chaincode_tools")]
    pub chaincode_tools: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            gopath: None,
            crypto_config: default_crypto_config(),
            chaincode_tools: default_chaincode_tools(),
        }
    }
}

fn default_crypto_config() -> PathBuf {
    PathBuf::from("/etc/hyperledger/crypto-config")
}

fn default_chaincode_tools() -> PathBuf {
    PathBuf::from("/etc/hyperledger/chaincode_tools")
}

/// Manifest lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Section of `package.json` holding the fallback chaincode list
    #[serde(default = "default_package_section")]
    pub package_section: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            package_section: default_package_section(),
        }
    }
}

fn default_package_section() -> String {
    "kuma-hf-chaincode-dev".to_string()
}

/// Peer CLI invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerConfig {
    #[serde(default = "default_peer_binary")]
    pub binary: String,

    /// Passed as `--logging-level` to instantiate and upgrade
    #[serde(default = "default_logging_level")]
    pub logging_level: String,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            binary: default_peer_binary(),
            logging_level: default_logging_level(),
        }
    }
}

fn default_peer_binary() -> String {
    "peer".to_string()
}

fn default_logging_level() -> String {
    "debug".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub reconcile: ReconcileConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub peer: PeerConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CcsyncResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CcsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the working directory config, user config, or defaults,
    /// then apply environment overrides and validate.
    pub fn load_or_default(project_root: Option<&Path>) -> CcsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (CCSYNC_* prefix)
    pub fn with_env_overrides(self) -> CcsyncResult<Self> {
        loader::with_env_overrides(self)
    }

    /// Reject settings no run could use
    pub fn validate(&self) -> CcsyncResult<()> {
        if self.reconcile.concurrency == 0 {
            return Err(CcsyncError::InvalidSetting {
                key: "reconcile.concurrency".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.manifest.package_section.trim().is_empty() {
            return Err(CcsyncError::InvalidSetting {
                key: "manifest.package_section".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The Go workspace root: `paths.gopath`, else `$GOPATH`
    pub fn gopath(&self) -> CcsyncResult<PathBuf> {
        if let Some(gopath) = &self.paths.gopath {
            return Ok(gopath.clone());
        }
        match std::env::var_os("GOPATH") {
            Some(gopath) if !gopath.is_empty() => Ok(PathBuf::from(gopath)),
            _ => Err(CcsyncError::InvalidSetting {
                key: "paths.gopath".to_string(),
                message: "not configured and GOPATH is not set".to_string(),
            }),
        }
    }
}
