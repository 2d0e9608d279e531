//! Error codes for the catalog backend.
//!
//! This module defines all error codes used throughout the library.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that callers surface in their own presentation layer.

use core::fmt;

/// Centralized error codes for the catalog backend.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Item not found
    ItemNotFound,
    /// Category not found
    CategoryNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Deletion blocked by referential integrity
    DatabaseConflict,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Store unavailable
    DbUnavailable,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ItemNotFound => "ITEM_NOT_FOUND",
            ErrorCode::CategoryNotFound => "CATEGORY_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DatabaseConflict => "DATABASE_CONFLICT",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
