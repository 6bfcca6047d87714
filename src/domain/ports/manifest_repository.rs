//! Manifest Repository Port
//!
//! Locates and reads the desired-state documents.

use crate::domain::entities::ChaincodeEntry;
use crate::error::CcsyncResult;

/// Source of chaincode manifest entries
pub trait ManifestRepository {
    /// Read every chaincode entry listed by the manifest, in manifest order
    fn load(&self) -> CcsyncResult<Vec<ChaincodeEntry>>;

    /// Where the manifest was found (for display)
    fn describe(&self) -> String;
}
