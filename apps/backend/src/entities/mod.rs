//! Persisted record shapes owned by the stores.

pub mod categories;
pub mod items;

pub use categories::Category;
pub use items::Item;
