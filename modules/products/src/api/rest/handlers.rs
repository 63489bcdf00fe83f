//! REST handlers for the products module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use rest_problem::{FieldViolation, Problem};
use serde_json::Value;
use tracing::info;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::domain::service::Service;

use super::dto::{ListProductsQuery, MessageDto, ProductDto};
use super::error::{PRODUCT_NOT_FOUND, domain_error_to_problem};
use super::openapi::ApiDoc;
use super::validation::{parse_create, parse_filter, parse_update};

pub type ApiResult<T> = Result<T, Problem>;

/// An id that does not parse cannot name a stored product.
fn parse_id(raw: &str, uri: &Uri) -> ApiResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| Problem::not_found(PRODUCT_NOT_FOUND).with_instance(uri.path()))
}

fn invalid(errors: Vec<FieldViolation>, uri: &Uri) -> Problem {
    Problem::validation(errors).with_instance(uri.path())
}

fn json_body(body: Result<Json<Value>, JsonRejection>, uri: &Uri) -> ApiResult<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        Problem::bad_request(rejection.body_text()).with_instance(uri.path())
    })
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = super::dto::CreateProductReq,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Validation failed", body = Problem),
    )
)]
#[tracing::instrument(skip(svc, uri, body))]
pub async fn create_product(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let body = json_body(body, &uri)?;
    let req = parse_create(&body).map_err(|errors| invalid(errors, &uri))?;

    info!(product.name = %req.name, "Creating new product");

    let product = svc
        .create_product(req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ProductDto::from(product)),
    ))
}

/// List products with optional price and name filters
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Matching products, oldest first", body = [ProductDto]),
        (status = 400, description = "Invalid filter", body = Problem),
    )
)]
#[tracing::instrument(skip(svc, uri, query))]
pub async fn list_products(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListProductsQuery>,
) -> ApiResult<Json<Vec<ProductDto>>> {
    let filter = parse_filter(&query).map_err(|errors| invalid(errors, &uri))?;

    let products = svc
        .list_products(&filter)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = Problem),
    )
)]
#[tracing::instrument(skip(svc, uri), fields(product.id = %id))]
pub async fn get_product(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductDto>> {
    let id = parse_id(&id, &uri)?;

    let product = svc
        .get_product(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    Ok(Json(ProductDto::from(product)))
}

/// Update a product (partial)
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    request_body = super::dto::UpdateProductReq,
    responses(
        (status = 200, description = "The updated product", body = ProductDto),
        (status = 400, description = "Validation failed", body = Problem),
        (status = 404, description = "Product not found", body = Problem),
    )
)]
#[tracing::instrument(skip(svc, uri, body), fields(product.id = %id))]
pub async fn update_product(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProductDto>> {
    let body = json_body(body, &uri)?;
    let req = parse_update(&body).map_err(|errors| invalid(errors, &uri))?;
    let id = parse_id(&id, &uri)?;

    info!("Updating product");

    let product = svc
        .update_product(id, req.into())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    Ok(Json(ProductDto::from(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 404, description = "Product not found", body = Problem),
    )
)]
#[tracing::instrument(skip(svc, uri), fields(product.id = %id))]
pub async fn delete_product(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageDto>> {
    let id = parse_id(&id, &uri)?;

    info!("Deleting product");

    svc.delete_product(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    Ok(Json(MessageDto {
        message: "Product deleted successfully".to_owned(),
    }))
}

/// Serve the OpenAPI document for this module.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
