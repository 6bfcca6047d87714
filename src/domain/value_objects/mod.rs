//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod language;
mod verb;

pub use language::{Language, UnknownLanguage};
pub use verb::{Listing, Verb};
