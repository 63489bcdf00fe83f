use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{Product, ProductFilter, ProductPatch};

/// Repository trait for Product persistence operations.
///
/// Abstracts the document store so the domain service stays independent of
/// the storage implementation. Implementations own ordering: `list` returns
/// products in creation order.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Store a new product.
    async fn insert(&self, product: Product) -> Result<Product, DomainError>;

    /// All products matching `filter`, oldest first.
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID.
    async fn get(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Apply `patch` and stamp `updated_at` as one atomic step, so concurrent
    /// patches to different fields all survive. Returns `None` if `id` is not
    /// stored.
    async fn update(
        &self,
        id: Uuid,
        patch: ProductPatch,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Product>, DomainError>;

    /// Delete a product by ID. Returns whether it existed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
