// Unit tests for error mapping - pure domain logic without store dependencies
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;

#[test]
fn maps_validation() {
    let de = DomainError::validation("bad field");
    assert_eq!(de.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_conflicts() {
    let fk = DomainError::conflict(ConflictKind::ForeignKeyRestrict, "still referenced");
    assert_eq!(fk.code().as_str(), "DATABASE_CONFLICT");

    // Generic conflict fallback
    let other = DomainError::conflict(
        ConflictKind::Other("some conflict".to_string()),
        "generic conflict",
    );
    assert_eq!(other.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let item = DomainError::not_found(NotFoundKind::Item, "no item");
    assert_eq!(item.code(), ErrorCode::ItemNotFound);

    let category = DomainError::not_found(NotFoundKind::Category, "no category");
    assert_eq!(category.code(), ErrorCode::CategoryNotFound);

    let other = DomainError::not_found(NotFoundKind::Other("Record".into()), "no record");
    assert_eq!(other.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::Unavailable, "down");
    assert_eq!(down.code(), ErrorCode::DbUnavailable);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    assert_eq!(other.code(), ErrorCode::Internal);
}

#[test]
fn display_carries_detail() {
    let de = DomainError::not_found(NotFoundKind::Item, "Item 7 not found");
    assert!(de.to_string().contains("Item 7 not found"));
}
