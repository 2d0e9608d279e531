//! Category store contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::categories::Category;
use crate::errors::store::StoreError;

/// Persistence contract for categories, keyed by identifier.
#[async_trait]
pub trait CategoryRepo: Send + Sync {
    /// Handle to an existing category ahead of associating it with an item.
    /// Fails with `StoreError::NotFound` if the id is unknown.
    async fn get_reference(&self, id: i64) -> Result<Category, StoreError>;
}

#[async_trait]
impl<T: CategoryRepo + ?Sized> CategoryRepo for Arc<T> {
    async fn get_reference(&self, id: i64) -> Result<Category, StoreError> {
        (**self).get_reference(id).await
    }
}
