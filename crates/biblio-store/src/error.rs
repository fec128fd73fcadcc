//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                              │
//! │                                                                   │
//! │  ValidationError (biblio-core)                                    │
//! │       │                                                           │
//! │       ▼                                                           │
//! │  StoreError (this module) ← adds NotFound and the invariant       │
//! │       │                      taxonomy                             │
//! │       ▼                                                           │
//! │  Presentation layer decides whether and how to surface it         │
//! │                                                                   │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The original system degraded every precondition failure to a silent
//! no-op. Here each operation reports exactly which precondition failed;
//! no code path panics.

use biblio_core::ValidationError;
use thiserror::Error;

// =============================================================================
// Invariant Violations
// =============================================================================

/// Rule-set breaches detected at an operation boundary. State is never
/// mutated when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Borrow attempted while `available == 0`.
    #[error("no copies of book {book_id} are available")]
    NoCopiesAvailable { book_id: String },

    /// Borrow attempted by a member whose status is not active.
    #[error("member {member_id} is inactive")]
    MemberInactive { member_id: String },

    /// Return attempted on a loan that is already closed.
    #[error("loan {loan_id} is already returned")]
    LoanAlreadyClosed { loan_id: String },

    /// Return would push `available` above `copies`.
    #[error("returning loan {loan_id} would exceed the copy count of book {book_id}")]
    CopiesExceedTotal { loan_id: String, book_id: String },

    /// Delete attempted on an entity still referenced by open loans.
    #[error("{entity} {id} has {open} open loan(s)")]
    OpenLoansExist {
        entity: &'static str,
        id: String,
        open: usize,
    },
}

// =============================================================================
// Store Error
// =============================================================================

/// Store operation errors.
///
/// The three-way split mirrors the operation contract: unresolved ids,
/// rule-set breaches, and field-level validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Entity not found for the given id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A cross-entity rule would be broken.
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    /// Caller-supplied fields failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("Book", "b-1");
        assert_eq!(err.to_string(), "Book not found: b-1");

        let err: StoreError = InvariantViolation::NoCopiesAvailable {
            book_id: "b-1".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invariant violation: no copies of book b-1 are available"
        );
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let err: StoreError = ValidationError::Required { field: "title" }.into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(err.to_string(), "validation error: title is required");
    }
}
