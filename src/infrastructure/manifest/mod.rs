//! Manifest repository implementations

mod json;

pub use json::{JsonManifestRepository, DEFAULT_PACKAGE_SECTION, INDEX_FILE, PACKAGE_FILE};
