//! # Domain Types
//!
//! Core domain types used throughout the Kassa receipt service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CatalogItem   │   │    LineItem     │   │     Receipt     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  item_id        │   │  lines          │       │
//! │  │  title          │   │  name (frozen)  │   │  grand_total    │       │
//! │  │  price_cents    │   │  quantity       │   │  created_at     │       │
//! │  └─────────────────┘   │  line_total     │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  CatalogItem is owned by the catalog (read-only here).                 │
//! │  LineItem and Receipt are created fresh per request, never persisted.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `LineItem` freezes the catalog item's name and computed total at
//! composition time, so a later catalog edit cannot change what an already
//! rendered receipt says.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// An item available for purchase.
///
/// Owned by the external catalog; this core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier (integer catalog key).
    pub id: i64,

    /// Display name shown on the receipt and in the catalog listing.
    pub title: String,

    /// Unit price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,
}

impl CatalogItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One aggregated row of a receipt: one item, its quantity, its subtotal.
///
/// Uses the snapshot pattern to freeze item data at composition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog id of the purchased item.
    pub item_id: i64,

    /// Item name at composition time (frozen).
    pub name: String,

    /// Number of times the item id occurred in the request. Always positive.
    pub quantity: i64,

    /// Exact line subtotal: unit price × quantity.
    pub line_total: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// The full set of line items plus grand total and creation time for one
/// purchase event.
///
/// ## Invariants
/// - `grand_total` always equals the exact sum of `line_total` over `lines`
/// - `lines` follow the first-seen order of distinct ids in the request
/// - a receipt with zero lines has `grand_total = 0.00` and is valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Aggregated line items, in first-seen order.
    pub lines: Vec<LineItem>,

    /// Exact sum of all line totals.
    pub grand_total: Money,

    /// Composition wall-clock time, formatted `DD.MM.YYYY HH:MM`.
    pub created_at: String,
}

impl Receipt {
    /// Checks if the receipt has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of line items.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

// =============================================================================
// Catalog Listing DTO
// =============================================================================

/// Wire representation of a catalog item for the listing endpoint.
///
/// ## Why a String Price?
/// The listing contract renders prices with exactly two fraction digits
/// (`"2.50"`), which a float cannot guarantee. Formatting happens here, at
/// the boundary, from exact integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItemDto {
    pub id: i64,
    pub name: String,
    pub price: String,
}

impl From<&CatalogItem> for CatalogItemDto {
    fn from(item: &CatalogItem) -> Self {
        CatalogItemDto {
            id: item.id,
            name: item.title.clone(),
            price: item.price().to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> CatalogItem {
        CatalogItem {
            id: 1,
            title: "Coffee".to_string(),
            price_cents: 250,
        }
    }

    #[test]
    fn test_catalog_item_price() {
        assert_eq!(coffee().price(), Money::from_cents(250));
    }

    #[test]
    fn test_dto_formats_price_with_two_digits() {
        let dto = CatalogItemDto::from(&coffee());
        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, "Coffee");
        assert_eq!(dto.price, "2.50");
    }

    #[test]
    fn test_dto_serialization_shape() {
        let json = serde_json::to_value(CatalogItemDto::from(&coffee())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Coffee", "price": "2.50"})
        );
    }
}
