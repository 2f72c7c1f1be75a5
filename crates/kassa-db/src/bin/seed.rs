//! # Seed Data Generator
//!
//! Populates the catalog with sample items for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p kassa-db --bin seed
//!
//! # Specify database path
//! cargo run -p kassa-db --bin seed -- --db ./data/kassa.db
//! ```

use std::env;

use kassa_db::{Database, DbConfig};

/// Sample catalog: (title, price in cents).
const SAMPLE_ITEMS: &[(&str, i64)] = &[
    ("Coffee", 250),
    ("Tea", 175),
    ("Espresso", 220),
    ("Cappuccino", 320),
    ("Croissant", 280),
    ("Cheesecake", 450),
    ("Sandwich", 520),
    ("Orange Juice", 300),
    ("Sparkling Water", 150),
    ("Cookie", 120),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = parse_db_path().unwrap_or_else(|| "./data/kassa.db".to_string());
    println!("Seeding catalog at {db_path}");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.items();

    let existing = repo.list_all().await?;
    if !existing.is_empty() {
        println!(
            "Catalog already has {} items; nothing to do",
            existing.len()
        );
        return Ok(());
    }

    for (title, price_cents) in SAMPLE_ITEMS {
        let item = repo.insert(title, *price_cents).await?;
        println!("  {}: {} ({})", item.id, item.title, item.price());
    }

    println!("Seeded {} items", SAMPLE_ITEMS.len());
    db.close().await;
    Ok(())
}

/// Pulls `--db <path>` out of the argument list, if present.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|pos| args.get(pos + 1).cloned())
}
