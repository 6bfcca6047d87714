//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `shell` - Command execution with dry-run support
//! - `peer/` - `peer` CLI gateway and listing parser
//! - `build` - Compile, npm and source-fetch scripts
//! - `docker` - Container runtime for stale artifact cleanup
//! - `manifest/` - JSON manifest repository
//! - `events/` - Event sinks (NDJSON)

pub mod build;
pub mod docker;
pub mod events;
pub mod manifest;
pub mod peer;
pub mod shell;

// Re-export for convenience
pub use build::ShellBuilder;
pub use docker::DockerCli;
pub use events::JsonEventSink;
pub use manifest::JsonManifestRepository;
pub use peer::PeerCli;
pub use shell::{shell_quote, ShellError, ShellRunner};
