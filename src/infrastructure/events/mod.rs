//! Event Sink Implementations
//!
//! Provides concrete implementations of ReconcileEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human console sink lives with the binary's UI code.

mod json;

pub use json::JsonEventSink;
