//! Deployed-state records returned by peer queries

use serde::Serialize;

/// One row of `peer chaincode list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRecord {
    pub name: String,
    pub version: String,
    pub path: String,
}

impl InventoryRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            path: path.into(),
        }
    }

    /// Case-insensitive match on name and path, and on version unless ignored
    pub fn matches(&self, name: &str, path: &str, version: Option<&str>) -> bool {
        self.name.eq_ignore_ascii_case(name)
            && self.path.eq_ignore_ascii_case(path)
            && version.map_or(true, |v| self.version.eq_ignore_ascii_case(v))
    }
}

/// Combined state of one chaincode on one peer/channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Installed at the desired version
    pub installed: bool,
    /// Instantiated at the desired version
    pub instantiated: bool,
    /// Version currently instantiated on the channel, if any
    pub deployed_version: Option<String>,
}
