//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use ccsync::presentation::factory;
//!
//! let use_case = factory::create_reconcile_use_case(&config, base_path, false, true, sink)?;
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_clean_use_case, create_reconcile_use_case, SourceLayout};
