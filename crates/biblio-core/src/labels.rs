//! # Display Labels
//!
//! Label-lookup collaborator for the presentation layer.
//!
//! ## Contract
//! Given a string key, [`Labels::get`] returns the display string in the
//! selected language. A key with no table entry is returned **unchanged** -
//! callers can always render the result, and a missing translation shows up
//! on screen as the raw key instead of a crash or a blank.
//!
//! The tables here carry the keys the core itself emits (category labels,
//! status labels, the unknown-reference sentinels) plus the dashboard
//! headings used by the seed binary. The full UI string catalog lives with
//! the presentation layer.

use serde::{Deserialize, Serialize};

// =============================================================================
// Language
// =============================================================================

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Turkish,
    English,
}

impl Default for Language {
    fn default() -> Self {
        Language::Turkish
    }
}

// =============================================================================
// Label Tables
// =============================================================================

const TR: &[(&str, &str)] = &[
    ("header.title", "Akıllı Kütüphane Sistemi"),
    ("dashboard.totalBooks", "Toplam Kitap"),
    ("dashboard.totalMembers", "Toplam Üye"),
    ("dashboard.borrowedBooks", "Ödünç Verilen"),
    ("dashboard.availableBooks", "Mevcut Kitap"),
    ("common.unknownBook", "Bilinmeyen Kitap"),
    ("common.unknownMember", "Bilinmeyen Üye"),
    ("category.technology", "Teknoloji"),
    ("category.literature", "Edebiyat"),
    ("category.history", "Tarih"),
    ("category.science", "Bilim"),
    ("category.art", "Sanat"),
    ("category.philosophy", "Felsefe"),
    ("status.borrowed", "Ödünç Alındı"),
    ("status.returned", "İade Edildi"),
    ("status.overdue", "Gecikmiş"),
    ("members.active", "Aktif"),
    ("members.inactive", "Pasif"),
];

const EN: &[(&str, &str)] = &[
    ("header.title", "Smart Library System"),
    ("dashboard.totalBooks", "Total Books"),
    ("dashboard.totalMembers", "Total Members"),
    ("dashboard.borrowedBooks", "Borrowed Books"),
    ("dashboard.availableBooks", "Available Books"),
    ("common.unknownBook", "Unknown Book"),
    ("common.unknownMember", "Unknown Member"),
    ("category.technology", "Technology"),
    ("category.literature", "Literature"),
    ("category.history", "History"),
    ("category.science", "Science"),
    ("category.art", "Art"),
    ("category.philosophy", "Philosophy"),
    ("status.borrowed", "Borrowed"),
    ("status.returned", "Returned"),
    ("status.overdue", "Overdue"),
    ("members.active", "Active"),
    ("members.inactive", "Inactive"),
];

// =============================================================================
// Labels
// =============================================================================

/// Label lookup with a selected language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Labels {
    language: Language,
}

impl Labels {
    /// Creates a lookup for the given language.
    pub fn new(language: Language) -> Self {
        Labels { language }
    }

    /// The currently selected language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the selected language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolves `key` to its display string, or returns `key` unchanged
    /// when the table has no entry.
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::Turkish => TR,
            Language::English => EN,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
