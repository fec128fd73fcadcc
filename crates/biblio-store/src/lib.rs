//! # biblio-store: In-Memory Entity Store for Biblio
//!
//! This crate provides the owning store for the Biblio system: a single
//! [`Library`] value holding the book catalog, the member register, and the
//! loan ledger, with every mutation funneled through its operation methods.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Biblio Data Flow                           │
//! │                                                                   │
//! │  Presentation call (borrow_book, search_books, ...)               │
//! │       │                                                           │
//! │       ▼                                                           │
//! │  ┌─────────────────────────────────────────────────────────────┐ │
//! │  │                  biblio-store (THIS CRATE)                  │ │
//! │  │                                                             │ │
//! │  │   ┌────────────┐   ┌─────────────┐   ┌──────────────────┐  │ │
//! │  │   │  Library   │   │  catalog /  │   │   circulation    │  │ │
//! │  │   │(library.rs)│   │ membership  │   │ (borrow/return,  │  │ │
//! │  │   │            │◄──│   (CRUD)    │   │  copy invariant) │  │ │
//! │  │   │ books      │   └─────────────┘   └──────────────────┘  │ │
//! │  │   │ members    │   ┌──────────────────────────────────────┐ │ │
//! │  │   │ loans      │◄──│   query (search, stats, activity)    │ │ │
//! │  │   └────────────┘   └──────────────────────────────────────┘ │ │
//! │  └─────────────────────────────────────────────────────────────┘ │
//! │                                                                   │
//! │  All state lives in process memory; dropping the Library drops    │
//! │  the whole data set.                                              │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`library`] - The owning [`Library`] store, id/timestamp generation
//! - [`catalog`] - Book create/update/remove
//! - [`membership`] - Member create/update/remove
//! - [`circulation`] - Borrow/return and the copy-count invariant
//! - [`query`] - Derived, side-effect-free views and statistics
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use biblio_store::Library;
//! use biblio_core::types::{BookDraft, MemberDraft};
//!
//! let mut library = Library::new();
//! let book = library.add_book(book_draft)?;
//! let member = library.add_member(member_draft)?;
//!
//! let loan = library.borrow_book(&book.id, &member.id)?;
//! library.return_book(&loan.id)?;
//!
//! let stats = library.dashboard_stats();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod circulation;
pub mod error;
pub mod library;
pub mod membership;
pub mod query;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{InvariantViolation, StoreError, StoreResult};
pub use library::Library;
pub use query::{CategoryShare, DashboardStats, LoanStats};
