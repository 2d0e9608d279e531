use time::OffsetDateTime;

use crate::entities::categories::Category;

/// Catalog item domain model.
///
/// The item store owns the authoritative state; the service only ever holds
/// copies. `id == 0` marks a record the store has not assigned an identifier
/// to yet; `save` returns the authoritative row.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: OffsetDateTime,
    /// Associated categories, unique by id.
    pub categories: Vec<Category>,
}

impl Item {
    /// A blank, unsaved record. Callers copy representation fields onto it
    /// before handing it to the store.
    pub fn unsaved() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            img_url: String::new(),
            date: OffsetDateTime::now_utc(),
            categories: Vec::new(),
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }
}
