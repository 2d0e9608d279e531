//! Store contracts the service layer depends on.
//!
//! Persistence is an external collaborator: real adapters (SQL, remote, ...)
//! live outside this crate, and `backend-test-support` ships in-memory
//! implementations satisfying the same contracts.

pub mod categories;
pub mod items;
