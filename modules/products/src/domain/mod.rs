//! Domain layer for the products module.
//!
//! The domain layer **MUST NOT** import `api::*`; the API depends on the
//! domain, never the reverse.

pub mod error;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;
