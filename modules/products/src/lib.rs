//! Products Module
//!
//! CRUD for the `Product` resource: a REST API over a document store.
//!
//! ## Architecture
//!
//! - `domain/` - models, validation rules, repository port and the service
//! - `infra/storage/` - the in-memory document store behind the port
//! - `api/rest/` - DTOs, request validation, handlers, routes, OpenAPI
//! - `config.rs` - module configuration
//!
//! The host application builds a [`Service`] around a repository and mounts
//! [`router`] on its HTTP server.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;

pub use api::rest::routes::router;
pub use config::ProductsConfig;
pub use domain::service::Service;
pub use infra::storage::InMemoryProductsRepository;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
