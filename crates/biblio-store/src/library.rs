//! # Library Store
//!
//! The owning in-memory store. One [`Library`] value holds the whole data
//! set; it is created empty, operated on through the catalog, membership,
//! circulation, and query methods, and simply dropped at teardown.
//!
//! ## State Sharing
//! All mutating operations take `&mut self` and all reads take `&self`, so
//! an embedding presentation layer (or test harness) can never mutate
//! entities behind the store's back. A concurrent embedding must serialize
//! mutations externally (e.g. `Arc<Mutex<Library>>`); the store itself is
//! single-threaded and synchronous.

use biblio_core::types::{Book, LoanRecord, Member};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The in-memory entity store.
///
/// ## Collections
/// - `books` - the catalog, in insertion order
/// - `members` - the member register, in insertion order
/// - `loans` - the loan ledger, append-only, in creation order
///
/// Loan records are never removed; insertion order is what the
/// recent-activity view reads back.
#[derive(Debug, Default)]
pub struct Library {
    pub(crate) books: Vec<Book>,
    pub(crate) members: Vec<Member>,
    pub(crate) loans: Vec<LoanRecord>,
}

impl Library {
    /// Creates an empty library.
    pub fn new() -> Self {
        Library::default()
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// The full catalog, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The member register, in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The loan ledger, in creation order.
    pub fn loans(&self) -> &[LoanRecord] {
        &self.loans
    }

    /// Looks up a book by id.
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Looks up a member by id.
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Looks up a loan record by id.
    pub fn loan(&self, id: &str) -> Option<&LoanRecord> {
        self.loans.iter().find(|l| l.id == id)
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    pub(crate) fn book_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    pub(crate) fn loan_mut(&mut self, id: &str) -> Option<&mut LoanRecord> {
        self.loans.iter_mut().find(|l| l.id == id)
    }

    /// Count of open loans referencing a book.
    pub(crate) fn open_loans_of_book(&self, book_id: &str) -> usize {
        self.loans
            .iter()
            .filter(|l| l.is_open() && l.book_id == book_id)
            .count()
    }

    /// Count of open loans held by a member.
    pub(crate) fn open_loans_of_member(&self, member_id: &str) -> usize {
        self.loans
            .iter()
            .filter(|l| l.is_open() && l.member_id == member_id)
            .count()
    }

    /// Generates a fresh entity id. UUID v4, collision-free even for many
    /// creations within the same clock tick.
    pub(crate) fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Current wall-clock timestamp for generated entities.
    pub(crate) fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
