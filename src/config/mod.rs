//! Configuration module for ccsync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CCSYNC_*)
//! 3. Working directory config (./ccsync.toml)
//! 4. User config (~/.config/ccsync/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, ManifestConfig, PathsConfig, PeerConfig, ReconcileConfig};
