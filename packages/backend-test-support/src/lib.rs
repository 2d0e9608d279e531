//! Catalog backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: in-memory
//! store implementations satisfying the store contracts, canonical fixtures,
//! and unified logging initialization.

pub mod factory;
pub mod memory;
pub mod test_logging;
pub mod unique_helpers;
