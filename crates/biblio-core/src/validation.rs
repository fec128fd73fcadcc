//! # Validation Module
//!
//! Field-level rule checks for caller-supplied entity drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                            │
//! │                                                                   │
//! │  Layer 1: Presentation (external)                                 │
//! │  ├── Basic format checks (empty, length)                          │
//! │  └── Immediate user feedback                                      │
//! │           │                                                       │
//! │           ▼                                                       │
//! │  Layer 2: Store operation boundary                                │
//! │  └── THIS MODULE: domain rule validation, runs before any         │
//! │      collection is mutated                                        │
//! │           │                                                       │
//! │           ▼                                                       │
//! │  Layer 3: Circulation invariant guards (biblio-store)             │
//! │  └── available/copies arithmetic, loan state transitions          │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use biblio_core::validation::{validate_title, validate_copy_counts};
//!
//! validate_title("Suç ve Ceza").unwrap();
//! validate_copy_counts(8, 6).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{BookDraft, MemberDraft};
use crate::MAX_COPIES;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    required_text("title", title, 200)
}

/// Validates an author name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
pub fn validate_author(author: &str) -> ValidationResult<()> {
    required_text("author", author, 200)
}

/// Validates an ISBN.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 32 characters
/// - Digits, hyphens and the check character 'X' only
///
/// The checksum itself is NOT verified; the ISBN is an opaque business
/// identifier.
///
/// ## Example
/// ```rust
/// use biblio_core::validation::validate_isbn;
///
/// assert!(validate_isbn("978-605-123-456-7").is_ok());
/// assert!(validate_isbn("").is_err());
/// assert!(validate_isbn("978 605").is_err());
/// ```
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    let isbn = isbn.trim();

    if isbn.is_empty() {
        return Err(ValidationError::Required { field: "isbn" });
    }

    if isbn.len() > 32 {
        return Err(ValidationError::TooLong {
            field: "isbn",
            max: 32,
        });
    }

    if !isbn
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == 'X' || c == 'x')
    {
        return Err(ValidationError::InvalidFormat {
            field: "isbn",
            reason: "must contain only digits, hyphens, and 'X'",
        });
    }

    Ok(())
}

/// Validates a member name.
pub fn validate_member_name(name: &str) -> ValidationResult<()> {
    required_text("name", name, 200)
}

/// Validates a contact email.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 254 characters
/// - Must contain a '@' with text on both sides
///
/// This is a shape check, not RFC 5322 parsing.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email",
            max: 254,
        });
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    };
    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "must look like local@domain",
        });
    }

    Ok(())
}

/// Validates a contact phone number. Free-form, required, bounded length.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    required_text("phone", phone, 32)
}

/// Validates a free-form description. May be empty.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.len() > 2000 {
        return Err(ValidationError::TooLong {
            field: "description",
            max: 2000,
        });
    }
    Ok(())
}

// Shared shape for required, length-bounded text fields.
fn required_text(field: &'static str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.len() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a publish year.
///
/// ## Rules
/// - Must be between 1 and 9999
pub fn validate_publish_year(year: i32) -> ValidationResult<()> {
    if !(1..=9999).contains(&year) {
        return Err(ValidationError::OutOfRange {
            field: "publish_year",
            min: 1,
            max: 9999,
        });
    }

    Ok(())
}

/// Validates the copy-count pair supplied at book creation or update.
///
/// ## Rules
/// - `copies` must be between 1 and [`MAX_COPIES`]
/// - `available` must not exceed `copies`
///
/// The original data-entry form allowed `available > copies` through; here
/// the pair is rejected before it can ever reach the inventory arithmetic.
pub fn validate_copy_counts(copies: u32, available: u32) -> ValidationResult<()> {
    if copies == 0 || copies > MAX_COPIES {
        return Err(ValidationError::OutOfRange {
            field: "copies",
            min: 1,
            max: MAX_COPIES as i64,
        });
    }

    if available > copies {
        return Err(ValidationError::AvailableExceedsCopies { available, copies });
    }

    Ok(())
}

// =============================================================================
// Draft Validators
// =============================================================================

/// Validates every field of a book draft. Called by the store before a
/// catalog insert or wholesale update.
pub fn validate_book_draft(draft: &BookDraft) -> ValidationResult<()> {
    validate_title(&draft.title)?;
    validate_author(&draft.author)?;
    validate_isbn(&draft.isbn)?;
    validate_publish_year(draft.publish_year)?;
    validate_copy_counts(draft.copies, draft.available)?;
    validate_description(&draft.description)?;
    Ok(())
}

/// Validates every field of a member draft.
pub fn validate_member_draft(draft: &MemberDraft) -> ValidationResult<()> {
    validate_member_name(&draft.name)?;
    validate_email(&draft.email)?;
    validate_phone(&draft.phone)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, MemberStatus};

    fn book_draft() -> BookDraft {
        BookDraft {
            title: "Yapay Zeka ve Makine Öğrenmesi".to_string(),
            author: "Dr. Ahmet Yılmaz".to_string(),
            isbn: "978-605-123-456-7".to_string(),
            category: Category::Technology,
            publish_year: 2023,
            copies: 5,
            available: 3,
            description: "Modern yapay zeka teknikleri.".to_string(),
        }
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Suç ve Ceza").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_isbn() {
        assert!(validate_isbn("978-975-123-789-0").is_ok());
        assert!(validate_isbn("043942089X").is_ok());
        assert!(validate_isbn("").is_err());
        assert!(validate_isbn("isbn with spaces").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ayse.demir@email.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@domain").is_err());
        assert!(validate_email("local@").is_err());
    }

    #[test]
    fn test_validate_publish_year() {
        assert!(validate_publish_year(1866).is_ok());
        assert!(validate_publish_year(2023).is_ok());
        assert!(validate_publish_year(0).is_err());
        assert!(validate_publish_year(10000).is_err());
    }

    #[test]
    fn test_validate_copy_counts() {
        assert!(validate_copy_counts(5, 3).is_ok());
        assert!(validate_copy_counts(5, 5).is_ok());
        assert!(validate_copy_counts(1, 0).is_ok());

        assert!(validate_copy_counts(0, 0).is_err());
        assert!(validate_copy_counts(1000, 1).is_err());
        assert!(matches!(
            validate_copy_counts(5, 6),
            Err(ValidationError::AvailableExceedsCopies {
                available: 6,
                copies: 5
            })
        ));
    }

    #[test]
    fn test_validate_book_draft() {
        assert!(validate_book_draft(&book_draft()).is_ok());

        let mut bad = book_draft();
        bad.available = 9;
        assert!(validate_book_draft(&bad).is_err());

        let mut bad = book_draft();
        bad.title = String::new();
        assert!(validate_book_draft(&bad).is_err());
    }

    #[test]
    fn test_validate_member_draft() {
        let draft = MemberDraft {
            name: "Ayşe Demir".to_string(),
            email: "ayse.demir@email.com".to_string(),
            phone: "0532 123 45 67".to_string(),
            status: MemberStatus::Active,
        };
        assert!(validate_member_draft(&draft).is_ok());

        let mut bad = draft.clone();
        bad.email = "broken".to_string();
        assert!(validate_member_draft(&bad).is_err());

        let mut bad = draft;
        bad.phone = String::new();
        assert!(validate_member_draft(&bad).is_err());
    }
}
