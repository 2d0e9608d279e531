//! Infrastructure-facing helpers.

pub mod store_errors;
