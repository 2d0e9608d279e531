//! In-memory store implementations.
//!
//! These satisfy the same contracts as a real persistence adapter and stand
//! in for mocked repositories: behavior is honest (id assignment, filtering,
//! windowing) while calls that matter to the contract are recorded for
//! verification.

pub mod categories;
pub mod items;

pub use categories::InMemoryCategoryStore;
pub use items::InMemoryItemStore;
