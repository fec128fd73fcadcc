//! # Demo Library Seeder
//!
//! Builds an in-memory library with the demo data set, runs a borrow/return
//! cycle, and prints the derived reports.
//!
//! ## Usage
//! ```bash
//! # Turkish labels (default)
//! cargo run -p biblio-store --bin seed
//!
//! # English labels
//! cargo run -p biblio-store --bin seed -- --lang en
//! ```
//!
//! ## Seeded Data
//! - Three books (technology, literature, history)
//! - Two active members
//! - One open loan

use std::env;

use biblio_core::types::{BookDraft, Category, CategoryFilter, MemberDraft, MemberStatus};
use biblio_core::{Labels, Language};
use biblio_store::Library;
use tracing_subscriber::EnvFilter;

fn demo_books() -> Vec<BookDraft> {
    vec![
        BookDraft {
            title: "Yapay Zeka ve Makine Öğrenmesi".to_string(),
            author: "Dr. Ahmet Yılmaz".to_string(),
            isbn: "978-605-123-456-7".to_string(),
            category: Category::Technology,
            publish_year: 2023,
            copies: 5,
            available: 5,
            description: "Modern yapay zeka teknikleri ve uygulamaları hakkında kapsamlı bir rehber."
                .to_string(),
        },
        BookDraft {
            title: "Suç ve Ceza".to_string(),
            author: "Fyodor Dostoyevski".to_string(),
            isbn: "978-975-123-789-0".to_string(),
            category: Category::Literature,
            publish_year: 1866,
            copies: 8,
            available: 8,
            description: "Rus edebiyatının başyapıtlarından biri.".to_string(),
        },
        BookDraft {
            title: "Osmanlı Tarihi".to_string(),
            author: "Prof. Dr. Mehmet Özkan".to_string(),
            isbn: "978-605-987-654-3".to_string(),
            category: Category::History,
            publish_year: 2022,
            copies: 4,
            available: 4,
            description: "Osmanlı İmparatorluğunun kuruluşundan yıkılışına kadar detaylı tarih."
                .to_string(),
        },
    ]
}

fn demo_members() -> Vec<MemberDraft> {
    vec![
        MemberDraft {
            name: "Ayşe Demir".to_string(),
            email: "ayse.demir@email.com".to_string(),
            phone: "0532 123 45 67".to_string(),
            status: MemberStatus::Active,
        },
        MemberDraft {
            name: "Mehmet Kaya".to_string(),
            email: "mehmet.kaya@email.com".to_string(),
            phone: "0533 987 65 43".to_string(),
            status: MemberStatus::Active,
        },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut labels = Labels::new(Language::Turkish);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lang" | "-l" => {
                if i + 1 < args.len() {
                    labels = match args[i + 1].as_str() {
                        "en" => Labels::new(Language::English),
                        _ => Labels::new(Language::Turkish),
                    };
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Biblio Demo Library Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -l, --lang <tr|en>  Label language (default: tr)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("📚 {}", labels.get("header.title"));
    println!("================================");
    println!();

    // Seed the catalog and the member register
    let mut library = Library::new();

    let mut book_ids = Vec::new();
    for draft in demo_books() {
        let book = library.add_book(draft)?;
        println!("✓ Book added: {} ({})", book.title, labels.get(&book.category.label_key()));
        book_ids.push(book.id);
    }

    let mut member_ids = Vec::new();
    for draft in demo_members() {
        let member = library.add_member(draft)?;
        println!("✓ Member added: {}", member.name);
        member_ids.push(member.id);
    }

    // Open one loan, then run a full borrow/return cycle on another book
    let open_loan = library.borrow_book(&book_ids[0], &member_ids[0])?;
    println!();
    println!(
        "✓ Loan opened: \"{}\" → {} (due {})",
        library.book_title(&open_loan.book_id),
        library.member_name(&open_loan.member_id),
        open_loan.due_at.format("%Y-%m-%d")
    );

    let cycle = library.borrow_book(&book_ids[1], &member_ids[1])?;
    let cycle = library.return_book(&cycle.id)?;
    println!(
        "✓ Loan cycled:  \"{}\" → {} ({})",
        library.book_title(&cycle.book_id),
        library.member_name(&cycle.member_id),
        labels.get("status.returned")
    );

    // Dashboard
    let stats = library.dashboard_stats();
    println!();
    println!("{}: {}", labels.get("dashboard.totalBooks"), stats.total_books);
    println!("{}: {}", labels.get("dashboard.totalMembers"), stats.total_members);
    println!("{}: {}", labels.get("dashboard.borrowedBooks"), stats.borrowed_books);
    println!("{}: {}", labels.get("dashboard.availableBooks"), stats.available_books);

    // Category distribution
    println!();
    for share in library.category_distribution() {
        if share.count > 0 {
            println!(
                "  {:<12} {} ({:.0}%)",
                labels.get(&share.category.label_key()),
                share.count,
                share.percentage
            );
        }
    }

    // Search check
    println!();
    let hits = library.search_books("öğren", CategoryFilter::All).count();
    println!("Search 'öğren': {} result(s)", hits);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
