//! Domain service for products.
//!
//! Owns ID and timestamp assignment and the field rules; persistence goes
//! through the [`ProductsRepository`] port.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::ProductsConfig;
use crate::domain::error::DomainError;
use crate::domain::model::{NewProduct, Product, ProductFilter, ProductPatch};
use crate::domain::repo::ProductsRepository;
use crate::domain::validation::{validate_new, validate_patch};

/// Product catalog service.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ProductsRepository>,
    config: ProductsConfig,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn ProductsRepository>, config: ProductsConfig) -> Self {
        Self { repo, config }
    }

    /// Create a product with a fresh ID and timestamps.
    ///
    /// # Errors
    /// [`DomainError::Validation`] if a field rule fails, or a storage error.
    #[instrument(skip(self, new), fields(product.name = %new.name))]
    pub async fn create_product(&self, new: NewProduct) -> Result<Product, DomainError> {
        validate_new(&new, &self.config)?;

        let now = OffsetDateTime::now_utc();
        let NewProduct {
            name,
            description,
            price,
            category,
            stock,
            image_url,
        } = new;

        let product = Product {
            id: Uuid::now_v7(),
            name,
            description,
            price,
            category,
            stock,
            image_url,
            created_at: now,
            updated_at: now,
        };

        let product = self.repo.insert(product).await?;
        info!(product.id = %product.id, "Created product");
        Ok(product)
    }

    /// List products matching `filter`, oldest first.
    ///
    /// # Errors
    /// Storage errors only.
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let products = self.repo.list(filter).await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// # Errors
    /// [`DomainError::ProductNotFound`] if `id` is not stored.
    pub async fn get_product(&self, id: Uuid) -> Result<Product, DomainError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::product_not_found(id))
    }

    /// Apply `patch` and refresh `updated_at`.
    ///
    /// # Errors
    /// [`DomainError::Validation`] for a bad patch,
    /// [`DomainError::ProductNotFound`] if `id` is not stored.
    #[instrument(skip(self, patch), fields(product.id = %id))]
    pub async fn update_product(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Product, DomainError> {
        validate_patch(&patch, &self.config)?;

        let product = self
            .repo
            .update(id, patch, OffsetDateTime::now_utc())
            .await?
            .ok_or_else(|| DomainError::product_not_found(id))?;

        info!("Updated product");
        Ok(product)
    }

    /// # Errors
    /// [`DomainError::ProductNotFound`] if `id` is not stored.
    #[instrument(skip(self), fields(product.id = %id))]
    pub async fn delete_product(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::product_not_found(id));
        }
        info!("Deleted product");
        Ok(())
    }
}
