//! # Circulation Operations
//!
//! Borrow/return on the [`Library`] store, and the copy-count invariant.
//!
//! ## The Invariant
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │   For every book, at every observable point:                      │
//! │                                                                   │
//! │   available = copies − |open loans referencing the book|          │
//! │   0 ≤ available ≤ copies                                          │
//! │                                                                   │
//! │   borrow_book:  +1 open loan   −1 available   (one unit)          │
//! │   return_book:  −1 open loan   +1 available   (one unit)          │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both operations run all their precondition checks before touching any
//! collection, then apply the record write and the counter change with no
//! fallible step in between. A failed operation leaves the store exactly
//! as it found it.

use biblio_core::types::LoanRecord;
use tracing::{debug, info};

use crate::error::{InvariantViolation, StoreError, StoreResult};
use crate::library::Library;

impl Library {
    /// Opens a loan: lends one copy of a book to a member.
    ///
    /// ## Preconditions
    /// - Member exists and is active
    /// - Book exists and has at least one available copy
    ///
    /// ## Effect (atomic as a unit)
    /// Appends a `Borrowed` loan record due [`biblio_core::LOAN_PERIOD_DAYS`]
    /// days from now, and decrements the book's `available` by exactly 1.
    pub fn borrow_book(&mut self, book_id: &str, member_id: &str) -> StoreResult<LoanRecord> {
        debug!(book_id = %book_id, member_id = %member_id, "Opening loan");

        let member = self
            .member(member_id)
            .ok_or_else(|| StoreError::not_found("Member", member_id))?;
        if !member.is_active() {
            return Err(InvariantViolation::MemberInactive {
                member_id: member_id.to_string(),
            }
            .into());
        }

        let id = self.next_id();
        let now = self.now();

        let book = self
            .book_mut(book_id)
            .ok_or_else(|| StoreError::not_found("Book", book_id))?;
        if !book.has_available() {
            return Err(InvariantViolation::NoCopiesAvailable {
                book_id: book_id.to_string(),
            }
            .into());
        }

        book.available -= 1;
        let loan = LoanRecord::open(id, book_id.to_string(), member_id.to_string(), now);
        self.loans.push(loan.clone());

        info!(
            loan_id = %loan.id,
            book_id = %book_id,
            member_id = %member_id,
            due_at = %loan.due_at,
            "Loan opened"
        );
        Ok(loan)
    }

    /// Closes a loan: takes one copy back from a member.
    ///
    /// ## Preconditions
    /// - Loan record exists and is still open (closing twice is rejected,
    ///   so a repeated call can never double-increment `available`)
    /// - The increment must not push `available` above `copies`
    ///
    /// ## Effect (atomic as a unit)
    /// Sets `returned_at`, moves the record to `Returned`, and increments
    /// the book's `available` by exactly 1.
    pub fn return_book(&mut self, loan_id: &str) -> StoreResult<LoanRecord> {
        debug!(loan_id = %loan_id, "Closing loan");

        let now = self.now();

        let loan_idx = self
            .loans
            .iter()
            .position(|l| l.id == loan_id)
            .ok_or_else(|| StoreError::not_found("Loan", loan_id))?;
        if !self.loans[loan_idx].is_open() {
            return Err(InvariantViolation::LoanAlreadyClosed {
                loan_id: loan_id.to_string(),
            }
            .into());
        }

        let book_id = self.loans[loan_idx].book_id.clone();
        let book_idx = self
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or_else(|| StoreError::not_found("Book", book_id.as_str()))?;

        if self.books[book_idx].available >= self.books[book_idx].copies {
            return Err(InvariantViolation::CopiesExceedTotal {
                loan_id: loan_id.to_string(),
                book_id,
            }
            .into());
        }

        // checks done; apply both writes as a unit
        self.books[book_idx].available += 1;
        let loan = &mut self.loans[loan_idx];
        loan.mark_returned(now);
        let loan = loan.clone();

        info!(loan_id = %loan.id, book_id = %loan.book_id, "Loan closed");
        Ok(loan)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_core::types::{BookDraft, Category, LoanStatus, MemberDraft, MemberStatus};
    use biblio_core::LOAN_PERIOD_DAYS;
    use chrono::Duration;

    fn book_draft(copies: u32, available: u32) -> BookDraft {
        BookDraft {
            title: "Yapay Zeka ve Makine Öğrenmesi".to_string(),
            author: "Dr. Ahmet Yılmaz".to_string(),
            isbn: "978-605-123-456-7".to_string(),
            category: Category::Technology,
            publish_year: 2023,
            copies,
            available,
            description: String::new(),
        }
    }

    fn member_draft(status: MemberStatus) -> MemberDraft {
        MemberDraft {
            name: "Ayşe Demir".to_string(),
            email: "ayse.demir@email.com".to_string(),
            phone: "0532 123 45 67".to_string(),
            status,
        }
    }

    /// The spec's copy-count invariant, checked directly against the ledger.
    fn assert_reconciled(library: &Library) {
        for book in library.books() {
            let open = library.open_loans_of_book(&book.id) as u32;
            assert!(book.available <= book.copies);
            assert_eq!(book.available, book.copies - open);
            assert_eq!(book.lent_out(), open);
        }
    }

    #[test]
    fn test_borrow_creates_record_and_decrements() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(5, 3)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();

        let loan = library.borrow_book(&book.id, &member.id).unwrap();

        assert_eq!(loan.status, LoanStatus::Borrowed);
        assert_eq!(loan.book_id, book.id);
        assert_eq!(loan.member_id, member.id);
        assert_eq!(loan.due_at - loan.borrowed_at, Duration::days(LOAN_PERIOD_DAYS));
        assert_eq!(library.book(&book.id).unwrap().available, 2);
        assert_reconciled(&library);
    }

    #[test]
    fn test_return_closes_record_and_increments() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(5, 3)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();
        let loan = library.borrow_book(&book.id, &member.id).unwrap();

        let returned = library.return_book(&loan.id).unwrap();

        assert_eq!(returned.status, LoanStatus::Returned);
        assert!(returned.returned_at.is_some());
        assert_eq!(library.book(&book.id).unwrap().available, 3);
        assert_reconciled(&library);
    }

    #[test]
    fn test_borrow_return_roundtrip_restores_available() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(8, 6)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();

        let before = library.book(&book.id).unwrap().available;
        let loan = library.borrow_book(&book.id, &member.id).unwrap();
        library.return_book(&loan.id).unwrap();

        assert_eq!(library.book(&book.id).unwrap().available, before);
    }

    #[test]
    fn test_return_twice_is_rejected_without_double_increment() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(5, 3)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();
        let loan = library.borrow_book(&book.id, &member.id).unwrap();

        let first = library.return_book(&loan.id).unwrap();
        let err = library.return_book(&loan.id).unwrap_err();

        assert_eq!(
            err,
            StoreError::Invariant(InvariantViolation::LoanAlreadyClosed {
                loan_id: loan.id.clone()
            })
        );
        assert_eq!(library.book(&book.id).unwrap().available, 3);
        assert_eq!(library.loan(&loan.id).unwrap().returned_at, first.returned_at);
    }

    #[test]
    fn test_borrow_with_zero_available_changes_nothing() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(1, 0)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();

        let err = library.borrow_book(&book.id, &member.id).unwrap_err();

        assert_eq!(
            err,
            StoreError::Invariant(InvariantViolation::NoCopiesAvailable {
                book_id: book.id.clone()
            })
        );
        assert!(library.loans().is_empty());
        assert_eq!(library.book(&book.id).unwrap().available, 0);
    }

    #[test]
    fn test_borrow_unknown_ids_are_not_found() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(2, 2)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();

        assert_eq!(
            library.borrow_book(&book.id, "ghost").unwrap_err(),
            StoreError::not_found("Member", "ghost")
        );
        assert_eq!(
            library.borrow_book("ghost", &member.id).unwrap_err(),
            StoreError::not_found("Book", "ghost")
        );
        assert!(library.loans().is_empty());
    }

    #[test]
    fn test_borrow_by_inactive_member_is_rejected() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(2, 2)).unwrap();
        let member = library
            .add_member(member_draft(MemberStatus::Inactive))
            .unwrap();

        let err = library.borrow_book(&book.id, &member.id).unwrap_err();
        assert_eq!(
            err,
            StoreError::Invariant(InvariantViolation::MemberInactive {
                member_id: member.id.clone()
            })
        );
        assert_eq!(library.book(&book.id).unwrap().available, 2);
    }

    #[test]
    fn test_copies_can_be_exhausted_and_reconcile() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(3, 3)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();

        let loans: Vec<_> = (0..3)
            .map(|_| library.borrow_book(&book.id, &member.id).unwrap())
            .collect();
        assert_eq!(library.book(&book.id).unwrap().available, 0);
        assert_reconciled(&library);

        assert!(matches!(
            library.borrow_book(&book.id, &member.id),
            Err(StoreError::Invariant(
                InvariantViolation::NoCopiesAvailable { .. }
            ))
        ));

        for loan in &loans {
            library.return_book(&loan.id).unwrap();
            assert_reconciled(&library);
        }
        assert_eq!(library.book(&book.id).unwrap().available, 3);
    }

    #[test]
    fn test_return_never_pushes_available_above_copies() {
        let mut library = Library::new();
        let book = library.add_book(book_draft(5, 3)).unwrap();
        let member = library.add_member(member_draft(MemberStatus::Active)).unwrap();
        let loan = library.borrow_book(&book.id, &member.id).unwrap();

        // a wholesale catalog edit resets the counter behind the loan's back
        let mut draft = book_draft(5, 3);
        draft.available = 5;
        library.update_book(&book.id, draft).unwrap();

        let err = library.return_book(&loan.id).unwrap_err();
        assert_eq!(
            err,
            StoreError::Invariant(InvariantViolation::CopiesExceedTotal {
                loan_id: loan.id.clone(),
                book_id: book.id.clone()
            })
        );
        // rejected close leaves both sides untouched
        assert_eq!(library.book(&book.id).unwrap().available, 5);
        assert!(library.loan(&loan.id).unwrap().is_open());
    }
}
