//! # Repository Module
//!
//! Database repository implementations for the Kassa catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Receipt pipeline                                                      │
//! │       │                                                                 │
//! │       │  db.items().get_by_ids(&[1, 2])                                │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── get_by_ids(&self, ids)                                            │
//! │  ├── list_all(&self)                                                   │
//! │  └── insert(&self, title, price_cents)                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Easy to test against an in-memory database                          │
//! │  • Clean separation of concerns                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Catalog item lookup and listing

pub mod item;
