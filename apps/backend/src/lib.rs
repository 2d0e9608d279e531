#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod paging;
pub mod repos;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::paging::PagingConfig;
pub use dto::categories::CategoryDto;
pub use dto::items::ItemDto;
pub use entities::categories::Category;
pub use entities::items::Item;
pub use errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
pub use errors::{ErrorCode, StoreError};
pub use paging::{Page, PageRequest};
pub use repos::categories::CategoryRepo;
pub use repos::items::ItemRepo;
pub use services::items::ItemService;
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
