//! Transfer representations used at the service boundary.
//!
//! These are flat projections of the persisted records, created per request
//! and discarded after the response. They never hold authoritative state.

pub mod categories;
pub mod items;

pub use categories::CategoryDto;
pub use items::ItemDto;
