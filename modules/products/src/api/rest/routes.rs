//! Route registration for the products module

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::domain::service::Service;

use super::handlers;

/// Build the products router.
///
/// - `POST /products`, `GET /products`
/// - `GET /products/{id}`, `PUT /products/{id}`, `DELETE /products/{id}`
/// - `GET /openapi.json`
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/openapi.json", get(handlers::openapi_json))
        .layer(Extension(service))
}
