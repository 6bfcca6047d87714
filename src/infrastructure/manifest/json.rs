//! JSON manifest repository
//!
//! Layout under the chaincode base path:
//!
//! ```text
//! <base>/build/chaincodes.json      ["marbles", "wallet"]
//! <base>/package.json               { "<section>": { "chaincodes": [...] } }   (fallback)
//! <root>/<dir>/package.json         name, version, hf-language, hf-network
//! ```
//!
//! `<root>` is `<base>` or `<base>/build` depending on whether sources were built.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{ChaincodeEntry, NetworkConfig, OrdererEndpoint};
use crate::domain::ports::ManifestRepository;
use crate::error::{CcsyncError, CcsyncResult};

/// Index file, relative to the base path
pub const INDEX_FILE: &str = "build/chaincodes.json";
/// Fallback index, relative to the base path
pub const PACKAGE_FILE: &str = "package.json";
/// `package.json` section holding the fallback chaincode list
pub const DEFAULT_PACKAGE_SECTION: &str = "kuma-hf-chaincode-dev";

#[derive(Debug, Deserialize)]
struct PackageDto {
    name: Option<String>,
    version: Option<String>,
    #[serde(rename = "hf-language")]
    language: Option<String>,
    #[serde(rename = "hf-network")]
    network: Option<Vec<NetworkDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkDto {
    channel_id: Option<String>,
    instantiate_args: Option<Vec<String>>,
    endorsement_policy: Option<String>,
    orderer: Option<OrdererDto>,
    peers: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct OrdererDto {
    host: Option<String>,
    port: Option<u16>,
    org: Option<String>,
}

/// Reads the chaincode index and every listed chaincode's `package.json`
#[derive(Debug, Clone)]
pub struct JsonManifestRepository {
    base_path: PathBuf,
    chaincode_root: PathBuf,
    package_section: String,
}

impl JsonManifestRepository {
    pub fn new(base_path: impl Into<PathBuf>, chaincode_root: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            chaincode_root: chaincode_root.into(),
            package_section: DEFAULT_PACKAGE_SECTION.to_string(),
        }
    }

    pub fn with_package_section(mut self, section: impl Into<String>) -> Self {
        self.package_section = section.into();
        self
    }

    /// The index file that will be read, if any exists
    pub fn index_path(&self) -> CcsyncResult<PathBuf> {
        let primary = self.base_path.join(INDEX_FILE);
        if primary.is_file() {
            return Ok(primary);
        }
        let fallback = self.base_path.join(PACKAGE_FILE);
        if fallback.is_file() {
            return Ok(fallback);
        }
        Err(CcsyncError::ManifestNotFound { primary, fallback })
    }

    fn read_index(&self, path: &Path) -> CcsyncResult<Vec<String>> {
        let document = read_json(path)?;
        let list = if path.ends_with(INDEX_FILE) {
            document
        } else {
            document
                .get(&self.package_section)
                .and_then(|section| section.get("chaincodes"))
                .cloned()
                .ok_or_else(|| CcsyncError::MissingField {
                    field: format!("{}.chaincodes", self.package_section),
                    file: path.to_path_buf(),
                })?
        };
        serde_json::from_value(list).map_err(|e| invalid(path, e))
    }

    fn read_entry(&self, dir: &str) -> CcsyncResult<ChaincodeEntry> {
        let path = self.chaincode_root.join(dir).join(PACKAGE_FILE);
        let package: PackageDto =
            serde_json::from_value(read_json(&path)?).map_err(|e| invalid(&path, e))?;

        let networks = require(package.network, "hf-network", &path)?
            .into_iter()
            .enumerate()
            .map(|(i, network)| network_config(network, i, &path))
            .collect::<CcsyncResult<Vec<_>>>()?;

        Ok(ChaincodeEntry {
            dir: dir.to_string(),
            name: require(package.name, "name", &path)?,
            version: require(package.version, "version", &path)?,
            language: require(package.language, "hf-language", &path)?,
            networks,
            origin: path,
        })
    }
}

impl ManifestRepository for JsonManifestRepository {
    fn load(&self) -> CcsyncResult<Vec<ChaincodeEntry>> {
        let index = self.index_path()?;
        tracing::debug!(index = %index.display(), "reading chaincode index");
        self.read_index(&index)?
            .iter()
            .map(|dir| self.read_entry(dir))
            .collect()
    }

    fn describe(&self) -> String {
        match self.index_path() {
            Ok(path) => path.display().to_string(),
            Err(_) => self.base_path.join(INDEX_FILE).display().to_string(),
        }
    }
}

fn network_config(
    network: NetworkDto,
    index: usize,
    file: &Path,
) -> CcsyncResult<NetworkConfig> {
    let field = |name: &str| format!("hf-network[{index}].{name}");
    let orderer = require(network.orderer, &field("orderer"), file)?;

    Ok(NetworkConfig {
        channel_id: require(network.channel_id, &field("channelId"), file)?,
        orderer: OrdererEndpoint {
            host: require(orderer.host, &field("orderer.host"), file)?,
            port: require(orderer.port, &field("orderer.port"), file)?,
            org: require(orderer.org, &field("orderer.org"), file)?,
        },
        peers: require(network.peers, &field("peers"), file)?,
        instantiate_args: require(network.instantiate_args, &field("instantiateArgs"), file)?,
        endorsement_policy: network.endorsement_policy,
    })
}

fn require<T>(value: Option<T>, field: &str, file: &Path) -> CcsyncResult<T> {
    value.ok_or_else(|| CcsyncError::MissingField {
        field: field.to_string(),
        file: file.to_path_buf(),
    })
}

fn read_json(path: &Path) -> CcsyncResult<serde_json::Value> {
    let content = fs::read_to_string(path).map_err(|e| CcsyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| invalid(path, e))
}

fn invalid(path: &Path, err: serde_json::Error) -> CcsyncError {
    CcsyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: err.to_string(),
    }
}
