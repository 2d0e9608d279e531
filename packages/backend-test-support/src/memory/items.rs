//! In-memory item store with contract-level instrumentation.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use backend::entities::items::Item;
use backend::errors::store::StoreError;
use backend::paging::{Page, PageRequest};
use backend::repos::items::ItemRepo;
use parking_lot::{Mutex, RwLock};

/// Item store backed by maps.
///
/// Ids marked via [`mark_referenced`](Self::mark_referenced) stand in for
/// rows referenced from elsewhere in a real database: deleting them reports
/// an integrity violation. Every `delete_by_id` call is recorded so tests
/// can assert exactly one deletion attempt reached the store.
pub struct InMemoryItemStore {
    rows: RwLock<BTreeMap<i64, Item>>,
    referenced: RwLock<BTreeSet<i64>>,
    next_id: Mutex<i64>,
    delete_calls: Mutex<Vec<i64>>,
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Seed the store; id assignment continues above the highest seeded id.
    pub fn with_items(items: Vec<Item>) -> Self {
        let max_id = items.iter().map(|i| i.id).max().unwrap_or(0);
        let rows = items.into_iter().map(|i| (i.id, i)).collect();
        Self {
            rows: RwLock::new(rows),
            referenced: RwLock::new(BTreeSet::new()),
            next_id: Mutex::new(max_id + 1),
            delete_calls: Mutex::new(Vec::new()),
        }
    }

    /// Mark an id as referenced from elsewhere; deleting it will report an
    /// integrity violation.
    pub fn mark_referenced(&self, id: i64) {
        self.referenced.write().insert(id);
    }

    /// Every id a `delete_by_id` call was issued for, in order.
    pub fn delete_calls(&self) -> Vec<i64> {
        self.delete_calls.lock().clone()
    }

    /// Direct row inspection, bypassing the store contract.
    pub fn get(&self, id: i64) -> Option<Item> {
        self.rows.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl ItemRepo for InMemoryItemStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn find_all(
        &self,
        category_id: Option<i64>,
        name: &str,
        page: PageRequest,
    ) -> Result<Page<Item>, StoreError> {
        let needle = name.to_lowercase();
        let matches: Vec<Item> = self
            .rows
            .read()
            .values()
            .filter(|item| {
                let category_ok = category_id
                    .map_or(true, |cid| item.categories.iter().any(|c| c.id == cid));
                let name_ok = needle.is_empty() || item.name.to_lowercase().contains(&needle);
                category_ok && name_ok
            })
            .cloned()
            .collect();

        Ok(Page::paginate(matches, page))
    }

    async fn get_reference(&self, id: i64) -> Result<Item, StoreError> {
        self.rows
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn save(&self, mut item: Item) -> Result<Item, StoreError> {
        if item.id == 0 {
            let mut next = self.next_id.lock();
            item.id = *next;
            *next += 1;
        }
        self.rows.write().insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.delete_calls.lock().push(id);

        // Referential integrity trips before row existence, matching how a
        // database surfaces a restricted foreign key.
        if self.referenced.read().contains(&id) {
            return Err(StoreError::IntegrityViolation(format!(
                "item {id} is still referenced"
            )));
        }
        if self.rows.write().remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
