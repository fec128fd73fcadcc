//! # biblio-core: Pure Domain Model for Biblio
//!
//! This crate is the **heart** of Biblio, a single-tenant library
//! catalog/membership/loan tracker. It contains the domain types and rules
//! as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Biblio Architecture                          │
//! │                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐ │
//! │  │                 Presentation (external)                     │ │
//! │  │   Dashboard ──► Book list ──► Member list ──► Loan desk     │ │
//! │  └───────────────────────────────┬─────────────────────────────┘ │
//! │                                  │ operation contract             │
//! │  ┌───────────────────────────────▼─────────────────────────────┐ │
//! │  │                   biblio-store (Library)                    │ │
//! │  │   catalog ops, circulation ops, derived queries             │ │
//! │  └───────────────────────────────┬─────────────────────────────┘ │
//! │                                  │                                │
//! │  ┌───────────────────────────────▼─────────────────────────────┐ │
//! │  │               ★ biblio-core (THIS CRATE) ★                  │ │
//! │  │                                                             │ │
//! │  │   ┌──────────┐  ┌────────────┐  ┌────────┐  ┌───────────┐  │ │
//! │  │   │  types   │  │ validation │  │ error  │  │  labels   │  │ │
//! │  │   │  Book    │  │   rules    │  │ typed  │  │ tr/en     │  │ │
//! │  │   │  Member  │  │   checks   │  │ enums  │  │ lookup    │  │ │
//! │  │   │  Loan    │  └────────────┘  └────────┘  └───────────┘  │ │
//! │  │   └──────────┘                                              │ │
//! │  │                                                             │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │ │
//! │  └─────────────────────────────────────────────────────────────┘ │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, Member, LoanRecord, Category, etc.)
//! - [`error`] - Validation error types
//! - [`validation`] - Field-level rule checks
//! - [`labels`] - Display-label lookup tables (Turkish/English)
//!
//! ## Example Usage
//!
//! ```rust
//! use biblio_core::types::{LoanRecord, LoanStatus};
//! use biblio_core::LOAN_PERIOD_DAYS;
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let loan = LoanRecord::open("loan-1".into(), "book-1".into(), "member-1".into(), now);
//!
//! // Due dates are a fixed loan period after the borrow date
//! assert_eq!(loan.due_at - loan.borrowed_at, Duration::days(LOAN_PERIOD_DAYS));
//!
//! // Overdue is derived from the clock, never stored
//! assert_eq!(loan.effective_status(now), LoanStatus::Borrowed);
//! assert_eq!(loan.effective_status(now + Duration::days(15)), LoanStatus::Overdue);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod labels;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use biblio_core::Book` instead of
// `use biblio_core::types::Book`

pub use error::ValidationError;
pub use labels::{Labels, Language};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Loan period in days. Every loan is due exactly this many days after the
/// borrow date; nothing fires when the date passes, the due date is a stored
/// value compared lazily at query time.
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// Maximum number of physical copies a single catalog entry may hold.
///
/// ## Business Reason
/// Catches data-entry slips (e.g. typing 1000 instead of 10) before they
/// reach the inventory arithmetic.
pub const MAX_COPIES: u32 = 999;

/// Sentinel label key resolved for a loan whose book reference dangles.
pub const UNKNOWN_BOOK_KEY: &str = "common.unknownBook";

/// Sentinel label key resolved for a loan whose member reference dangles.
pub const UNKNOWN_MEMBER_KEY: &str = "common.unknownMember";
