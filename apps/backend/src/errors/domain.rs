//! Domain-level error type used across services and store contracts.
//!
//! This error type is HTTP- and store-agnostic. Callers embedding this
//! library map it to their own presentation (status codes, payloads) using
//! the variant plus [`DomainError::code`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Unavailable,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Item,
    Category,
    Other(String),
}

/// Domain-level conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Deletion blocked because other rows still reference the record
    ForeignKeyRestrict,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Stable caller-facing code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::Conflict(ConflictKind::ForeignKeyRestrict, _) => {
                ErrorCode::DatabaseConflict
            }
            DomainError::Conflict(ConflictKind::Other(_), _) => ErrorCode::Conflict,
            DomainError::NotFound(NotFoundKind::Item, _) => ErrorCode::ItemNotFound,
            DomainError::NotFound(NotFoundKind::Category, _) => ErrorCode::CategoryNotFound,
            DomainError::NotFound(NotFoundKind::Other(_), _) => ErrorCode::NotFound,
            DomainError::Infra(InfraErrorKind::Unavailable, _) => ErrorCode::DbUnavailable,
            DomainError::Infra(InfraErrorKind::Other(_), _) => ErrorCode::Internal,
        }
    }
}
