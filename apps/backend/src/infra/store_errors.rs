//! `StoreError` -> `DomainError` translation helpers.
//!
//! Services match explicitly on the store signals they own a policy for
//! (e.g. delete translating `IntegrityViolation` into a conflict) and route
//! everything else through `map_store_err`.

use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::store::StoreError;

/// Translate a `StoreError` into a `DomainError`, scoping "not found" to the
/// entity kind the caller was touching.
pub fn map_store_err(scope: NotFoundKind, e: StoreError) -> DomainError {
    match e {
        StoreError::NotFound => DomainError::not_found(scope, "Record not found"),
        StoreError::IntegrityViolation(detail) => {
            warn!(%detail, "integrity violation reported by store");
            DomainError::conflict(ConflictKind::ForeignKeyRestrict, detail)
        }
        StoreError::Unavailable(detail) => {
            warn!(%detail, "store unavailable");
            DomainError::infra(InfraErrorKind::Unavailable, detail)
        }
    }
}
