//! # Domain Types
//!
//! Core domain types used throughout Biblio.
//!
//! ## Type Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                              │
//! │                                                                   │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌────────────────┐  │
//! │  │      Book       │   │     Member      │   │   LoanRecord   │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ────────────  │  │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)     │  │
//! │  │  title, author  │   │  name, email    │   │  book_id (FK)  │  │
//! │  │  copies         │   │  status         │   │  member_id(FK) │  │
//! │  │  available      │   │  joined_at      │   │  due_at        │  │
//! │  └─────────────────┘   └─────────────────┘   └────────────────┘  │
//! │                                                                   │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌────────────────┐  │
//! │  │    Category     │   │  MemberStatus   │   │   LoanStatus   │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ────────────  │  │
//! │  │  Technology     │   │  Active         │   │  Borrowed      │  │
//! │  │  Literature     │   │  Inactive       │   │  Returned      │  │
//! │  │  History, ...   │   └─────────────────┘   │  Overdue*      │  │
//! │  └─────────────────┘                         └────────────────┘  │
//! │                                                                   │
//! │  * Overdue is derived at query time and never stored.             │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries an `id: String` holding a UUID v4, generated by the
//! store at creation time. LoanRecord references Book and Member by id only;
//! the store enforces that an *open* loan never dangles.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::LOAN_PERIOD_DAYS;

// =============================================================================
// Category
// =============================================================================

/// Book category. A fixed enumerated set; extending it means adding a
/// variant here and a row to [`Category::ALL`] and the label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Literature,
    History,
    Science,
    Art,
    Philosophy,
}

impl Category {
    /// All categories, in report display order.
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Literature,
        Category::History,
        Category::Science,
        Category::Art,
        Category::Philosophy,
    ];

    /// Stable machine-readable name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Literature => "literature",
            Category::History => "history",
            Category::Science => "science",
            Category::Art => "art",
            Category::Philosophy => "philosophy",
        }
    }

    /// Label key for the display-label lookup collaborator.
    ///
    /// ## Example
    /// ```rust
    /// use biblio_core::types::Category;
    /// assert_eq!(Category::History.label_key(), "category.history");
    /// ```
    pub fn label_key(&self) -> String {
        format!("category.{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CATEGORY_NAMES: &[&str] = &[
    "technology",
    "literature",
    "history",
    "science",
    "art",
    "philosophy",
];

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technology" => Ok(Category::Technology),
            "literature" => Ok(Category::Literature),
            "history" => Ok(Category::History),
            "science" => Ok(Category::Science),
            "art" => Ok(Category::Art),
            "philosophy" => Ok(Category::Philosophy),
            _ => Err(ValidationError::NotAllowed {
                field: "category",
                allowed: CATEGORY_NAMES,
            }),
        }
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Category filter for book search. `All` matches every book; `Only`
/// requires an exact category match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Checks whether a book in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    /// Parses the wire form used by the presentation layer: the literal
    /// `"all"` or a category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

// =============================================================================
// Book
// =============================================================================

/// A catalog entry for a title the library holds copies of.
///
/// ## Invariant
/// `0 <= available <= copies` at all times. `available` changes only through
/// the store's circulation operations; catalog create/update validates the
/// caller-supplied pair before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display title.
    pub title: String,

    /// Author name as printed on the cover.
    pub author: String,

    /// ISBN - opaque business identifier, not checksum-validated.
    pub isbn: String,

    /// Category from the fixed set.
    pub category: Category,

    /// Year of publication.
    pub publish_year: i32,

    /// Total physical copies the library owns.
    pub copies: u32,

    /// Copies not currently loaned out.
    pub available: u32,

    /// Free-form description.
    pub description: String,

    /// When the book was added to the catalog.
    pub added_at: DateTime<Utc>,
}

impl Book {
    /// Checks whether at least one copy is on the shelf.
    #[inline]
    pub fn has_available(&self) -> bool {
        self.available > 0
    }

    /// Count of copies currently out on loan.
    #[inline]
    pub fn lent_out(&self) -> u32 {
        self.copies - self.available
    }
}

/// Caller-supplied fields for creating or wholesale-updating a [`Book`].
/// The store generates `id` and `added_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: Category,
    pub publish_year: i32,
    pub copies: u32,
    pub available: u32,
    pub description: String,
}

// =============================================================================
// Member Status
// =============================================================================

/// Membership status. Inactive members keep their history but are rejected
/// at the borrow boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl Default for MemberStatus {
    fn default() -> Self {
        MemberStatus::Active
    }
}

// =============================================================================
// Member
// =============================================================================

/// A registered library member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone number, free-form.
    pub phone: String,

    /// Membership start date.
    pub joined_at: DateTime<Utc>,

    /// Current membership status.
    pub status: MemberStatus,
}

impl Member {
    /// Checks whether the member may open new loans.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

/// Caller-supplied fields for creating or wholesale-updating a [`Member`].
/// The store generates `id` and `joined_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: MemberStatus,
}

// =============================================================================
// Loan Status
// =============================================================================

/// The status of a loan record.
///
/// Stored records only ever hold `Borrowed` or `Returned`. `Overdue` is the
/// effective status of a `Borrowed` record whose due date has passed; it is
/// computed by [`LoanRecord::effective_status`] and never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Copy is out with a member.
    Borrowed,
    /// Copy came back; terminal state.
    Returned,
    /// Derived: borrowed and past due.
    Overdue,
}

// =============================================================================
// Loan Record
// =============================================================================

/// A record linking one book copy to one member for a bounded period.
///
/// ## Lifecycle
/// ```text
/// open ──► Borrowed ──(return_book)──► Returned
///              │
///              └─ due date passed? reported as Overdue at query time
/// ```
/// Created `Borrowed`, transitions once, irreversibly, to `Returned`.
/// Records are never deleted; returned records are the loan history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Borrowed book (foreign key).
    pub book_id: String,

    /// Borrowing member (foreign key).
    pub member_id: String,

    /// When the loan was opened.
    pub borrowed_at: DateTime<Utc>,

    /// Due date: `borrowed_at` plus the fixed loan period.
    pub due_at: DateTime<Utc>,

    /// When the copy came back; `None` while the loan is open.
    pub returned_at: Option<DateTime<Utc>>,

    /// Stored status, `Borrowed` or `Returned` only.
    pub status: LoanStatus,
}

impl LoanRecord {
    /// Opens a new loan record at `now`, due [`LOAN_PERIOD_DAYS`] later.
    pub fn open(id: String, book_id: String, member_id: String, now: DateTime<Utc>) -> Self {
        LoanRecord {
            id,
            book_id,
            member_id,
            borrowed_at: now,
            due_at: now + Duration::days(LOAN_PERIOD_DAYS),
            returned_at: None,
            status: LoanStatus::Borrowed,
        }
    }

    /// Marks the record returned at `now`. Caller must have checked
    /// [`is_open`](Self::is_open); the transition is one-way.
    pub fn mark_returned(&mut self, now: DateTime<Utc>) {
        self.returned_at = Some(now);
        self.status = LoanStatus::Returned;
    }

    /// Checks whether the loan is still open (copy out with a member).
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == LoanStatus::Borrowed
    }

    /// Checks whether the loan is open and past its due date at `now`.
    #[inline]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.is_open() && now > self.due_at
    }

    /// The status as of `now`: the stored status, except that an open loan
    /// past its due date reads as `Overdue`.
    pub fn effective_status(&self, now: DateTime<Utc>) -> LoanStatus {
        if self.is_overdue(now) {
            LoanStatus::Overdue
        } else {
            self.status
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
