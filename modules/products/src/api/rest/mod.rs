//! REST surface of the products module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod validation;
