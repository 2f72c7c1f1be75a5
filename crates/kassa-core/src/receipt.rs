//! # Receipt Aggregation and Composition
//!
//! Pure transformation from a raw, possibly-repeating sequence of item ids
//! into a priced [`Receipt`].
//!
//! ## Pipeline Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Receipt Creation Data Flow                             │
//! │                                                                         │
//! │  raw ids: [1, 1, 2, 99]                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  count_quantities ──► [(1, 2), (2, 1), (99, 1)]   (first-seen order)   │
//! │       │                                                                 │
//! │       │   catalog lookup (kassa-db, OUTSIDE this crate)                │
//! │       ▼                                                                 │
//! │  resolve_items ──► resolved: [(Coffee, 2), (Tea, 1)]                   │
//! │                    unresolved: [99]               (dropped, logged)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compose_receipt ──► Receipt { lines, grand_total = 6.75, created_at } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown-Id Policy
//! Ids with no catalog match contribute no line item and no error. That is
//! the documented contract of this service. `resolve_items` still returns
//! the unresolved ids so callers can log them.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::money::Money;
use crate::types::{CatalogItem, LineItem, Receipt};
use crate::RECEIPT_TIME_FORMAT;

// =============================================================================
// Aggregation
// =============================================================================

/// Counts occurrences of each distinct id, preserving first-seen order.
///
/// ## Example
/// ```rust
/// use kassa_core::receipt::count_quantities;
///
/// assert_eq!(count_quantities(&[1, 1, 2]), vec![(1, 2), (2, 1)]);
/// assert!(count_quantities(&[]).is_empty());
/// ```
///
/// ## Why Not a HashMap Return?
/// Line ordering on the receipt follows the order in which distinct ids
/// first appear in the request. A bare map would lose that.
pub fn count_quantities(ids: &[i64]) -> Vec<(i64, i64)> {
    let mut order: Vec<(i64, i64)> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for &id in ids {
        match index.get(&id) {
            Some(&pos) => order[pos].1 += 1,
            None => {
                index.insert(id, order.len());
                order.push((id, 1));
            }
        }
    }

    order
}

// =============================================================================
// Resolution
// =============================================================================

/// Result of matching counted ids against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved items with their quantities, in first-seen order.
    pub resolved: Vec<(CatalogItem, i64)>,

    /// Ids that had no catalog match. Dropped from the receipt; kept here
    /// for diagnostics.
    pub unresolved: Vec<i64>,
}

impl Resolution {
    /// An empty resolution (empty request or nothing matched).
    pub fn empty() -> Self {
        Resolution {
            resolved: Vec::new(),
            unresolved: Vec::new(),
        }
    }
}

/// Pairs quantity counts with their resolved catalog items.
///
/// `catalog_items` is the result of one batched catalog lookup for the
/// counted ids; missing entries make their id unresolved.
///
/// ## Example
/// ```rust
/// use kassa_core::receipt::{count_quantities, resolve_items};
/// use kassa_core::types::CatalogItem;
///
/// let catalog = vec![CatalogItem { id: 1, title: "Coffee".into(), price_cents: 250 }];
/// let resolution = resolve_items(&count_quantities(&[1, 1, 99]), &catalog);
///
/// assert_eq!(resolution.resolved.len(), 1);
/// assert_eq!(resolution.resolved[0].1, 2);
/// assert_eq!(resolution.unresolved, vec![99]);
/// ```
pub fn resolve_items(counts: &[(i64, i64)], catalog_items: &[CatalogItem]) -> Resolution {
    let by_id: HashMap<i64, &CatalogItem> =
        catalog_items.iter().map(|item| (item.id, item)).collect();

    let mut resolution = Resolution::empty();
    for &(id, quantity) in counts {
        match by_id.get(&id) {
            Some(&item) => resolution.resolved.push((item.clone(), quantity)),
            None => resolution.unresolved.push(id),
        }
    }

    resolution
}

// =============================================================================
// Composition
// =============================================================================

/// Composes a priced receipt from resolved items.
///
/// Each line total is `unit_price × quantity` in exact integer cents; the
/// grand total accumulates the exact cent values, never rounded display
/// strings. `now` is the composition wall-clock time supplied by the caller
/// (this crate does no I/O, clock reads included).
///
/// An empty resolution is a valid input and yields a receipt with zero
/// lines and a grand total of `0.00`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use kassa_core::receipt::{compose_receipt, Resolution};
/// use kassa_core::types::CatalogItem;
///
/// let coffee = CatalogItem { id: 1, title: "Coffee".into(), price_cents: 250 };
/// let resolution = Resolution { resolved: vec![(coffee, 2)], unresolved: vec![] };
/// let now = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap().and_hms_opt(14, 35, 0).unwrap();
///
/// let receipt = compose_receipt(&resolution, now);
/// assert_eq!(receipt.grand_total.to_string(), "5.00");
/// assert_eq!(receipt.created_at, "26.08.2026 14:35");
/// ```
pub fn compose_receipt(resolution: &Resolution, now: NaiveDateTime) -> Receipt {
    let mut lines = Vec::with_capacity(resolution.resolved.len());
    let mut grand_total = Money::zero();

    for (item, quantity) in &resolution.resolved {
        let line_total = item.price().multiply_quantity(*quantity);
        grand_total += line_total;
        lines.push(LineItem {
            item_id: item.id,
            name: item.title.clone(),
            quantity: *quantity,
            line_total,
        });
    }

    Receipt {
        lines,
        grand_total,
        created_at: now.format(RECEIPT_TIME_FORMAT).to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem {
                id: 1,
                title: "Coffee".to_string(),
                price_cents: 250,
            },
            CatalogItem {
                id: 2,
                title: "Tea".to_string(),
                price_cents: 175,
            },
        ]
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 26)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_count_quantities_first_seen_order() {
        assert_eq!(count_quantities(&[1, 1, 2]), vec![(1, 2), (2, 1)]);
        assert_eq!(count_quantities(&[2, 1, 2, 1, 2]), vec![(2, 3), (1, 2)]);
    }

    #[test]
    fn test_count_quantities_empty() {
        assert!(count_quantities(&[]).is_empty());
    }

    #[test]
    fn test_count_quantities_has_no_size_cap() {
        // A purchase of any length is valid; repeats just raise the quantity.
        let ids = vec![1_i64; 1001];
        assert_eq!(count_quantities(&ids), vec![(1, 1001)]);
    }

    #[test]
    fn test_resolve_drops_unknown_ids() {
        let counts = count_quantities(&[999]);
        let resolution = resolve_items(&counts, &catalog());
        assert!(resolution.resolved.is_empty());
        assert_eq!(resolution.unresolved, vec![999]);
    }

    #[test]
    fn test_resolve_preserves_order() {
        let counts = count_quantities(&[2, 999, 1]);
        let resolution = resolve_items(&counts, &catalog());
        let names: Vec<&str> = resolution
            .resolved
            .iter()
            .map(|(item, _)| item.title.as_str())
            .collect();
        assert_eq!(names, vec!["Tea", "Coffee"]);
        assert_eq!(resolution.unresolved, vec![999]);
    }

    #[test]
    fn test_compose_coffee_and_tea() {
        // Coffee 2.50 × 2 = 5.00; Tea 1.75 × 1 = 1.75; grand total 6.75
        let counts = count_quantities(&[1, 1, 2]);
        let resolution = resolve_items(&counts, &catalog());
        let receipt = compose_receipt(&resolution, noon());

        assert_eq!(receipt.line_count(), 2);
        assert_eq!(receipt.lines[0].name, "Coffee");
        assert_eq!(receipt.lines[0].quantity, 2);
        assert_eq!(receipt.lines[0].line_total, Money::from_cents(500));
        assert_eq!(receipt.lines[1].name, "Tea");
        assert_eq!(receipt.lines[1].quantity, 1);
        assert_eq!(receipt.lines[1].line_total, Money::from_cents(175));
        assert_eq!(receipt.grand_total, Money::from_cents(675));
        assert_eq!(receipt.created_at, "26.08.2026 12:00");
    }

    #[test]
    fn test_compose_empty_is_valid() {
        let receipt = compose_receipt(&Resolution::empty(), noon());
        assert!(receipt.is_empty());
        assert_eq!(receipt.grand_total, Money::zero());
        assert_eq!(receipt.grand_total.to_string(), "0.00");
    }

    #[test]
    fn test_grand_total_equals_sum_of_lines() {
        // Property from the contract: grand_total == Σ line_total, checked
        // over a batch of pseudo-random request shapes.
        let catalog = catalog();
        let inputs: Vec<Vec<i64>> = vec![
            vec![],
            vec![1],
            vec![1, 1, 1, 2, 2],
            vec![2, 1, 2, 999, 1, 1],
            vec![999, 999],
        ];

        for ids in inputs {
            let resolution = resolve_items(&count_quantities(&ids), &catalog);
            let receipt = compose_receipt(&resolution, noon());
            let summed: Money = receipt.lines.iter().map(|l| l.line_total).sum();
            assert_eq!(receipt.grand_total, summed, "input: {ids:?}");
        }
    }

    #[test]
    fn test_line_count_matches_distinct_known_ids() {
        let resolution = resolve_items(&count_quantities(&[1, 2, 1, 999]), &catalog());
        let receipt = compose_receipt(&resolution, noon());
        assert_eq!(receipt.line_count(), 2);
    }
}
