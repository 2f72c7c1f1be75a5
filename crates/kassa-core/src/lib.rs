//! # kassa-core: Pure Business Logic for the Kassa Receipt Service
//!
//! This crate is the **heart** of Kassa. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kassa Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Layer (axum)                            │   │
//! │  │    POST /cash_machine/ ──► pipeline ──► PNG response           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kassa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │  receipt  │                  │   │
//! │  │   │CatalogItem│  │   Money   │  │ aggregate │                  │   │
//! │  │   │  Receipt  │  │ (cents)   │  │  compose  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kassa-db (Catalog Layer)                     │   │
//! │  │              SQLite queries, migrations, item repository        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, LineItem, Receipt)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`receipt`] - Aggregation and composition of receipts
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Infallible**: Aggregation and composition cannot fail; there is no
//!    invalid purchase shape (empty, repeated, or unknown ids are all handled)
//!
//! ## Example Usage
//!
//! ```rust
//! use kassa_core::money::Money;
//! use kassa_core::receipt::count_quantities;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(250); // 2.50
//!
//! // Count item quantities, preserving first-seen order
//! let counts = count_quantities(&[1, 1, 2]);
//! assert_eq!(counts, vec![(1, 2), (2, 1)]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod receipt;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kassa_core::Money` instead of
// `use kassa_core::money::Money`

pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Format string for the receipt creation timestamp.
///
/// ## Why This Format?
/// Receipts display their composition time as `DD.MM.YYYY HH:MM`,
/// e.g. `26.08.2026 14:35`. Minute precision is all a printed receipt needs.
pub const RECEIPT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";
