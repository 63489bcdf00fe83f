//! In-memory document store.
//!
//! Products live in a sharded concurrent map keyed by ID. No guard is held
//! across an `.await`; every operation completes synchronously inside the
//! async method.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{Product, ProductFilter, ProductPatch};
use crate::domain::repo::ProductsRepository;

#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    products: DashMap<Uuid, Product>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductsRepository for InMemoryProductsRepository {
    async fn insert(&self, product: Product) -> Result<Product, DomainError> {
        match self.products.entry(product.id) {
            Entry::Occupied(_) => Err(DomainError::storage(format!(
                "duplicate product id {}",
                product.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(product.clone());
                Ok(product)
            }
        }
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let mut found: Vec<Product> = self
            .products
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        // v7 ids are time-ordered, so they break created_at ties in insertion order
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(found)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        Ok(self.products.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ProductPatch,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Product>, DomainError> {
        // the shard stays write-locked until `slot` drops
        let Some(mut slot) = self.products.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(&mut slot);
        slot.updated_at = updated_at.max(slot.created_at);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.products.remove(&id).is_some())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use time::{Duration, OffsetDateTime};

    fn product(name: &str, price: f64, age_secs: i64) -> Product {
        let at = OffsetDateTime::UNIX_EPOCH + Duration::seconds(age_secs);
        Product {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            description: "d".to_owned(),
            price,
            category: String::new(),
            stock: 1,
            image_url: String::new(),
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn list_is_ordered_by_creation() {
        let repo = InMemoryProductsRepository::new();
        repo.insert(product("second", 1.0, 20)).await.unwrap();
        repo.insert(product("first", 1.0, 10)).await.unwrap();
        repo.insert(product("third", 1.0, 30)).await.unwrap();

        let names: Vec<_> = repo
            .list(&ProductFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_a_storage_error() {
        let repo = InMemoryProductsRepository::new();
        let p = product("a", 1.0, 0);
        repo.insert(p.clone()).await.unwrap();

        let err = repo.insert(p).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
        assert_eq!(repo.list(&ProductFilter::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let repo = InMemoryProductsRepository::new();
        let p = product("a", 1.0, 0);
        let rename = || ProductPatch {
            name: Some("b".to_owned()),
            ..ProductPatch::default()
        };
        let later = p.created_at + Duration::seconds(5);

        assert_eq!(repo.update(p.id, rename(), later).await.unwrap(), None);
        assert!(!repo.delete(p.id).await.unwrap());

        repo.insert(p.clone()).await.unwrap();
        let renamed = repo.update(p.id, rename(), later).await.unwrap().unwrap();
        assert_eq!(renamed.name, "b");
        assert_eq!(renamed.updated_at, later);
        assert_eq!(repo.get(p.id).await.unwrap(), Some(renamed));

        assert!(repo.delete(p.id).await.unwrap());
        assert!(repo.list(&ProductFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn updated_at_never_precedes_created_at() {
        let repo = InMemoryProductsRepository::new();
        let p = product("a", 1.0, 100);
        repo.insert(p.clone()).await.unwrap();

        let patched = repo
            .update(p.id, ProductPatch::default(), OffsetDateTime::UNIX_EPOCH)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(patched.updated_at, p.created_at);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_patches_to_different_fields_all_apply() {
        let repo = std::sync::Arc::new(InMemoryProductsRepository::new());
        let id = repo.insert(product("a", 1.0, 0)).await.unwrap().id;

        let tasks: Vec<_> = (0..32u32)
            .map(|i| {
                let repo = repo.clone();
                let patch = if i % 2 == 0 {
                    ProductPatch {
                        stock: Some(i),
                        ..ProductPatch::default()
                    }
                } else {
                    ProductPatch {
                        category: Some(format!("c{i}")),
                        ..ProductPatch::default()
                    }
                };
                tokio::spawn(async move {
                    repo.update(id, patch, OffsetDateTime::now_utc()).await
                })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().unwrap().is_some());
        }

        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.stock % 2, 0);
        assert!(stored.category.starts_with('c'));
    }
}
