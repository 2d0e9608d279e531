//! Error handling for the catalog backend.

pub mod domain;
pub mod error_code;
pub mod store;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::DomainError;
pub use error_code::ErrorCode;
pub use store::StoreError;
