//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod chaincode_builder;
pub mod container_runtime;
pub mod manifest_repository;
pub mod peer_gateway;
pub mod reconcile_events;

pub use chaincode_builder::{BuildError, ChaincodeBuilder, SourceFetcher};
pub use container_runtime::{ArtifactKind, ContainerRuntime, RuntimeError};
pub use manifest_repository::ManifestRepository;
pub use peer_gateway::{GatewayError, PeerGateway};
pub use reconcile_events::{NoopEventSink, ReconcileEvent, ReconcileEventSink};
