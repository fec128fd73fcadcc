//! # Query Layer
//!
//! Derived, side-effect-free views over the [`Library`] state.
//!
//! Every function here recomputes from the collections on each call -
//! nothing is cached, so a view can never go stale against the store it
//! was derived from. Overdue is computed here from the caller's clock and
//! never written back to the ledger.

use biblio_core::types::{Book, Category, CategoryFilter, LoanRecord};
use biblio_core::{UNKNOWN_BOOK_KEY, UNKNOWN_MEMBER_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::library::Library;

// =============================================================================
// Report Types
// =============================================================================

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Catalog entries (titles, not physical copies).
    pub total_books: usize,
    /// Registered members, active or not.
    pub total_members: usize,
    /// Currently open loan records.
    pub borrowed_books: usize,
    /// Sum of available copies across the catalog.
    pub available_books: u64,
}

/// One row of the category-distribution report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: Category,
    /// Catalog entries in this category.
    pub count: usize,
    /// Share of the whole catalog, 0.0..=100.0; 0.0 for an empty catalog.
    pub percentage: f64,
}

/// Lifetime loan counters for the reports view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanStats {
    /// All loan records ever created.
    pub total: usize,
    /// Records closed so far.
    pub returned: usize,
    /// Records still open.
    pub open: usize,
}

// =============================================================================
// Queries
// =============================================================================

impl Library {
    /// Searches the catalog: case-insensitive substring match on title OR
    /// author, intersected with the category filter.
    ///
    /// The returned iterator is lazy and restartable - each call filters
    /// the live collections from scratch. An empty term matches everything.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let hits: Vec<_> = library.search_books("öğren", CategoryFilter::All).collect();
    /// ```
    pub fn search_books<'a>(
        &'a self,
        term: &str,
        filter: CategoryFilter,
    ) -> impl Iterator<Item = &'a Book> + 'a {
        let term = term.to_lowercase();
        self.books.iter().filter(move |book| {
            let matches_term = term.is_empty()
                || book.title.to_lowercase().contains(&term)
                || book.author.to_lowercase().contains(&term);
            matches_term && filter.matches(book.category)
        })
    }

    /// Headline dashboard numbers.
    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_books: self.books.len(),
            total_members: self.members.len(),
            borrowed_books: self.loans.iter().filter(|l| l.is_open()).count(),
            available_books: self.books.iter().map(|b| u64::from(b.available)).sum(),
        }
    }

    /// Catalog share per category, in [`Category::ALL`] order. An empty
    /// catalog reports 0.0 for every category.
    pub fn category_distribution(&self) -> Vec<CategoryShare> {
        let total = self.books.len();
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self.books.iter().filter(|b| b.category == category).count();
                let percentage = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                CategoryShare {
                    category,
                    count,
                    percentage,
                }
            })
            .collect()
    }

    /// Lifetime loan counters.
    pub fn loan_stats(&self) -> LoanStats {
        let open = self.loans.iter().filter(|l| l.is_open()).count();
        LoanStats {
            total: self.loans.len(),
            returned: self.loans.len() - open,
            open,
        }
    }

    /// The last `n` loan records, most recent first. Records are never
    /// reordered, so insertion order is the tie-break.
    pub fn recent_activity(&self, n: usize) -> Vec<&LoanRecord> {
        self.loans.iter().rev().take(n).collect()
    }

    /// All open loans, in creation order.
    pub fn open_loans(&self) -> Vec<&LoanRecord> {
        self.loans.iter().filter(|l| l.is_open()).collect()
    }

    /// All closed loans, in creation order.
    pub fn returned_loans(&self) -> Vec<&LoanRecord> {
        self.loans.iter().filter(|l| !l.is_open()).collect()
    }

    /// Open loans past their due date as of `now`.
    pub fn overdue_loans(&self, now: DateTime<Utc>) -> Vec<&LoanRecord> {
        self.loans.iter().filter(|l| l.is_overdue(now)).collect()
    }

    // =========================================================================
    // Name Resolution
    // =========================================================================

    /// Resolves a book id to its title, or the `common.unknownBook` label
    /// key when the reference dangles (book removed after its loans
    /// closed). The label collaborator turns the key into display text.
    pub fn book_title(&self, book_id: &str) -> &str {
        self.book(book_id)
            .map(|b| b.title.as_str())
            .unwrap_or(UNKNOWN_BOOK_KEY)
    }

    /// Resolves a member id to their name, or the `common.unknownMember`
    /// label key when the reference dangles.
    pub fn member_name(&self, member_id: &str) -> &str {
        self.member(member_id)
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN_MEMBER_KEY)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
