//! In-memory category store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use backend::entities::categories::Category;
use backend::errors::store::StoreError;
use backend::repos::categories::CategoryRepo;
use parking_lot::RwLock;

/// Category store backed by a map.
#[derive(Default)]
pub struct InMemoryCategoryStore {
    rows: RwLock<BTreeMap<i64, Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        let rows = categories.into_iter().map(|c| (c.id, c)).collect();
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn insert(&self, category: Category) {
        self.rows.write().insert(category.id, category);
    }
}

#[async_trait]
impl CategoryRepo for InMemoryCategoryStore {
    async fn get_reference(&self, id: i64) -> Result<Category, StoreError> {
        self.rows
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
