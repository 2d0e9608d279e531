#![allow(dead_code)]

//! Shared fixtures for integration tests.

use std::sync::Arc;

use backend::services::items::ItemService;
use backend_test_support::factory;
use backend_test_support::memory::{InMemoryCategoryStore, InMemoryItemStore};
use backend_test_support::test_logging;

/// Id seeded into the item store.
pub const EXISTING_ID: i64 = 1;
/// Id absent from the item store.
pub const MISSING_ID: i64 = 26;
/// Id seeded into the item store and referenced from elsewhere.
pub const REFERENCED_ID: i64 = 3;
/// Category id absent from the category store.
pub const MISSING_CATEGORY_ID: i64 = 99;

pub type TestService = ItemService<Arc<InMemoryItemStore>, Arc<InMemoryCategoryStore>>;

/// Build a service over seeded in-memory stores, returning the store handles
/// for post-call inspection.
pub fn build_service() -> (TestService, Arc<InMemoryItemStore>, Arc<InMemoryCategoryStore>) {
    test_logging::init();

    let items = Arc::new(InMemoryItemStore::with_items(vec![
        factory::item(EXISTING_ID),
        factory::item(REFERENCED_ID),
    ]));
    items.mark_referenced(REFERENCED_ID);

    let categories = Arc::new(InMemoryCategoryStore::with_categories(vec![
        factory::category(factory::FIXTURE_CATEGORY_ID),
    ]));

    let service = ItemService::new(Arc::clone(&items), Arc::clone(&categories));
    (service, items, categories)
}
