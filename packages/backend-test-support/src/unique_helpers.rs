//! Test helpers for generating unique test data
//!
//! Uses ULIDs to keep test data unique across runs, so tests stay isolated
//! even against a shared store.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("item");
/// let id2 = unique_str("item");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("item-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique item name with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_name;
///
/// let name = unique_name("Phone");
/// assert!(name.starts_with("Phone "));
/// ```
pub fn unique_name(prefix: &str) -> String {
    format!("{} {}", prefix, Ulid::new())
}
