//! # Error Types
//!
//! Validation error types for biblio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         Error Types                               │
//! │                                                                   │
//! │  biblio-core errors (this file)                                   │
//! │  └── ValidationError  - Field-level input failures                │
//! │                                                                   │
//! │  biblio-store errors (separate crate)                             │
//! │  ├── StoreError::NotFound            - id unresolved              │
//! │  ├── StoreError::InvariantViolation  - rule-set breach            │
//! │  └── StoreError::Validation          - wraps ValidationError      │
//! │                                                                   │
//! │  Flow: ValidationError → StoreError → presentation layer          │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied entity fields do not meet the domain
/// rules. They are raised before any collection is touched, so a failed
/// validation never leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Invalid format (e.g. an email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Value is not in the allowed set (e.g. an unknown category name).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
    },

    /// Available copies exceed the total copy count.
    #[error("available copies ({available}) exceed total copies ({copies})")]
    AvailableExceedsCopies { available: u32, copies: u32 },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
