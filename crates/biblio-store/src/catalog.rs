//! # Catalog Operations
//!
//! Book create/update/remove on the [`Library`] store.
//!
//! ## Contract
//! - Creation and wholesale update validate every caller-supplied field,
//!   including `available <= copies`, before any state changes.
//! - Removal is **cascade-restrict**: a book with open loans cannot be
//!   removed. Returned loans are history and do not block removal; the
//!   query layer degrades their book reference to an "unknown" sentinel.

use biblio_core::types::{Book, BookDraft};
use biblio_core::validation::validate_book_draft;
use tracing::{debug, info};

use crate::error::{InvariantViolation, StoreError, StoreResult};
use crate::library::Library;

impl Library {
    /// Adds a book to the catalog.
    ///
    /// ## Returns
    /// * `Ok(Book)` - the stored entity with generated `id` and `added_at`
    /// * `Err(StoreError::Validation)` - a draft field failed validation
    pub fn add_book(&mut self, draft: BookDraft) -> StoreResult<Book> {
        debug!(title = %draft.title, "Adding book");

        validate_book_draft(&draft)?;

        let book = Book {
            id: self.next_id(),
            title: draft.title,
            author: draft.author,
            isbn: draft.isbn,
            category: draft.category,
            publish_year: draft.publish_year,
            copies: draft.copies,
            available: draft.available,
            description: draft.description,
            added_at: self.now(),
        };

        self.books.push(book.clone());
        info!(id = %book.id, title = %book.title, "Book added");
        Ok(book)
    }

    /// Replaces a book's fields wholesale. `id` and `added_at` are kept.
    ///
    /// ## Returns
    /// * `Ok(Book)` - the updated entity
    /// * `Err(StoreError::NotFound)` - no book with that id
    /// * `Err(StoreError::Validation)` - a draft field failed validation
    pub fn update_book(&mut self, id: &str, draft: BookDraft) -> StoreResult<Book> {
        debug!(id = %id, "Updating book");

        validate_book_draft(&draft)?;

        let book = self
            .book_mut(id)
            .ok_or_else(|| StoreError::not_found("Book", id))?;

        book.title = draft.title;
        book.author = draft.author;
        book.isbn = draft.isbn;
        book.category = draft.category;
        book.publish_year = draft.publish_year;
        book.copies = draft.copies;
        book.available = draft.available;
        book.description = draft.description;

        let book = book.clone();
        info!(id = %book.id, "Book updated");
        Ok(book)
    }

    /// Removes a book from the catalog.
    ///
    /// ## Returns
    /// * `Ok(())` - book removed
    /// * `Err(StoreError::NotFound)` - no book with that id
    /// * `Err(StoreError::Invariant)` - open loans still reference the book
    pub fn remove_book(&mut self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Removing book");

        if self.book(id).is_none() {
            return Err(StoreError::not_found("Book", id));
        }

        let open = self.open_loans_of_book(id);
        if open > 0 {
            return Err(InvariantViolation::OpenLoansExist {
                entity: "Book",
                id: id.to_string(),
                open,
            }
            .into());
        }

        self.books.retain(|b| b.id != id);
        info!(id = %id, "Book removed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_core::types::{Category, MemberDraft, MemberStatus};
    use biblio_core::ValidationError;

    fn book_draft() -> BookDraft {
        BookDraft {
            title: "Osmanlı Tarihi".to_string(),
            author: "Prof. Dr. Mehmet Özkan".to_string(),
            isbn: "978-605-987-654-3".to_string(),
            category: Category::History,
            publish_year: 2022,
            copies: 4,
            available: 2,
            description: "Kuruluşundan yıkılışına kadar detaylı tarih.".to_string(),
        }
    }

    fn member_draft() -> MemberDraft {
        MemberDraft {
            name: "Mehmet Kaya".to_string(),
            email: "mehmet.kaya@email.com".to_string(),
            phone: "0533 987 65 43".to_string(),
            status: MemberStatus::Active,
        }
    }

    #[test]
    fn test_add_book_generates_identity() {
        let mut library = Library::new();
        let book = library.add_book(book_draft()).unwrap();

        assert!(!book.id.is_empty());
        assert_eq!(book.copies, 4);
        assert_eq!(book.available, 2);
        assert_eq!(library.books().len(), 1);
        assert_eq!(library.book(&book.id).unwrap().title, "Osmanlı Tarihi");
    }

    #[test]
    fn test_add_book_rejects_available_above_copies() {
        let mut library = Library::new();
        let mut draft = book_draft();
        draft.available = 9;

        let err = library.add_book(draft).unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(ValidationError::AvailableExceedsCopies {
                available: 9,
                copies: 4
            })
        );
        assert!(library.books().is_empty());
    }

    #[test]
    fn test_update_book_is_wholesale_but_keeps_identity() {
        let mut library = Library::new();
        let book = library.add_book(book_draft()).unwrap();

        let mut draft = book_draft();
        draft.title = "Osmanlı Tarihi (2. Baskı)".to_string();
        draft.copies = 6;
        draft.available = 6;

        let updated = library.update_book(&book.id, draft).unwrap();
        assert_eq!(updated.id, book.id);
        assert_eq!(updated.added_at, book.added_at);
        assert_eq!(updated.title, "Osmanlı Tarihi (2. Baskı)");
        assert_eq!(updated.copies, 6);
        assert_eq!(library.books().len(), 1);
    }

    #[test]
    fn test_update_book_unknown_id_is_an_error() {
        let mut library = Library::new();
        let err = library.update_book("missing", book_draft()).unwrap_err();
        assert_eq!(err, StoreError::not_found("Book", "missing"));
    }

    #[test]
    fn test_remove_book() {
        let mut library = Library::new();
        let book = library.add_book(book_draft()).unwrap();

        library.remove_book(&book.id).unwrap();
        assert!(library.books().is_empty());

        let err = library.remove_book(&book.id).unwrap_err();
        assert_eq!(err, StoreError::not_found("Book", book.id.as_str()));
    }

    #[test]
    fn test_remove_book_restricted_while_loans_are_open() {
        let mut library = Library::new();
        let book = library.add_book(book_draft()).unwrap();
        let member = library.add_member(member_draft()).unwrap();
        let loan = library.borrow_book(&book.id, &member.id).unwrap();

        let err = library.remove_book(&book.id).unwrap_err();
        assert_eq!(
            err,
            StoreError::Invariant(InvariantViolation::OpenLoansExist {
                entity: "Book",
                id: book.id.clone(),
                open: 1
            })
        );
        assert_eq!(library.books().len(), 1);

        // once the loan closes, removal goes through and the history stays
        library.return_book(&loan.id).unwrap();
        library.remove_book(&book.id).unwrap();
        assert!(library.books().is_empty());
        assert_eq!(library.loans().len(), 1);
    }
}
