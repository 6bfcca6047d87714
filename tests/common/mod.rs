//! Common test utilities for ccsync CLI tests.
//!
//! This module provides `TestEnv`: an isolated working directory plus a fake
//! Fabric host the binary can reconcile against.

#![allow(dead_code)]

pub mod env;

pub use env::*;
