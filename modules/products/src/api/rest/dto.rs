//! REST DTOs for the products module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).
//! JSON keys are camelCase.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::model::{NewProduct, Product, ProductPatch};

/// REST DTO for product representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// REST DTO for creating a product.
///
/// `price` may also be sent as a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductReq {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// REST DTO for updating a product (partial)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductReq {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub image_url: Option<String>,
}

/// Query parameters for `GET /products`. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Lowest price to include
    pub min_price: Option<String>,
    /// Highest price to include
    pub max_price: Option<String>,
    /// Case-insensitive regular expression matched against the name
    pub name: Option<String>,
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category,
            stock: p.stock,
            image_url: p.image_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<CreateProductReq> for NewProduct {
    fn from(req: CreateProductReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category.unwrap_or_default(),
            stock: req.stock.unwrap_or_default(),
            image_url: req.image_url.unwrap_or_default(),
        }
    }
}

impl From<UpdateProductReq> for ProductPatch {
    fn from(req: UpdateProductReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            stock: req.stock,
            image_url: req.image_url,
        }
    }
}
