//! Item store contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::items::Item;
use crate::errors::store::StoreError;
use crate::paging::{Page, PageRequest};

/// Persistence contract for catalog items, keyed by identifier.
///
/// Implementations own transaction demarcation; every method is a single
/// store interaction.
#[async_trait]
pub trait ItemRepo: Send + Sync {
    /// Look up an item by id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Filtered, windowed listing. `category_id == None` means no category
    /// filter; an empty `name` matches everything.
    async fn find_all(
        &self,
        category_id: Option<i64>,
        name: &str,
        page: PageRequest,
    ) -> Result<Page<Item>, StoreError>;

    /// Handle to an existing row ahead of a write, avoiding an extra full
    /// read. Fails with `StoreError::NotFound` if the id is unknown.
    async fn get_reference(&self, id: i64) -> Result<Item, StoreError>;

    /// Insert (`id == 0`) or update; returns the authoritative row.
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    /// Delete by id. `StoreError::NotFound` if there is no such row,
    /// `StoreError::IntegrityViolation` if other rows still reference it.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: ItemRepo + ?Sized> ItemRepo for Arc<T> {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_all(
        &self,
        category_id: Option<i64>,
        name: &str,
        page: PageRequest,
    ) -> Result<Page<Item>, StoreError> {
        (**self).find_all(category_id, name, page).await
    }

    async fn get_reference(&self, id: i64) -> Result<Item, StoreError> {
        (**self).get_reference(id).await
    }

    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        (**self).save(item).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        (**self).delete_by_id(id).await
    }
}
