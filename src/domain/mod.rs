//! Domain Layer
//!
//! - `entities`: targets, plans, inventories and outcomes
//! - `value_objects`: small closed enums (language, verb, listing)
//! - `ports`: traits implemented by infrastructure
//! - `services`: the reconciliation engine

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
