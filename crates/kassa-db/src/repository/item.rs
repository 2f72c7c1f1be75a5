//! # Item Repository
//!
//! Database operations for catalog items.
//!
//! ## Key Operations
//! - Batched lookup by id for receipt aggregation
//! - Full listing ordered by descending price (the catalog's ordering
//!   contract)
//! - Insert, for seeding and tests
//!
//! ## Query Style
//! Queries are runtime-checked (`query_as::<_, ItemRecord>`) with a
//! `FromRow` record struct mapped into the pure `CatalogItem` domain type.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use kassa_core::CatalogItem;

// =============================================================================
// Row Mapping
// =============================================================================

/// Database row shape for the `items` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ItemRecord {
    id: i64,
    title: String,
    price_cents: i64,
}

impl From<ItemRecord> for CatalogItem {
    fn from(record: ItemRecord) -> Self {
        CatalogItem {
            id: record.id,
            title: record.title,
            price_cents: record.price_cents,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for catalog item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// // Batched lookup for a receipt request
/// let items = repo.get_by_ids(&[1, 1, 2]).await?;
///
/// // Catalog listing
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Fetches the subset of items whose ids appear in `ids`.
    ///
    /// One batched query per receipt request. Ids with no matching row are
    /// simply absent from the result; the caller decides what that means
    /// (the receipt pipeline drops them).
    ///
    /// ## Arguments
    /// * `ids` - Item ids to look up; duplicates are harmless
    pub async fn get_by_ids(&self, ids: &[i64]) -> DbResult<Vec<CatalogItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = ids.len(), "Looking up catalog items");

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, title, price_cents FROM items WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        builder.push(")");

        let records: Vec<ItemRecord> = builder
            .build_query_as::<ItemRecord>()
            .fetch_all(&self.pool)
            .await?;

        debug!(found = records.len(), "Catalog lookup returned items");
        Ok(records.into_iter().map(CatalogItem::from).collect())
    }

    /// Gets a single item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(CatalogItem))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<CatalogItem>> {
        let record = sqlx::query_as::<_, ItemRecord>(
            "SELECT id, title, price_cents FROM items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(CatalogItem::from))
    }

    /// Lists all catalog items, ordered by descending price.
    ///
    /// The ordering is the catalog's own contract (most expensive first),
    /// mirrored by an index on `price_cents DESC`.
    pub async fn list_all(&self) -> DbResult<Vec<CatalogItem>> {
        let records = sqlx::query_as::<_, ItemRecord>(
            "SELECT id, title, price_cents FROM items ORDER BY price_cents DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(CatalogItem::from).collect())
    }

    /// Inserts a new item and returns it with its assigned id.
    ///
    /// Used by the seed binary and tests. The schema rejects negative
    /// prices with a constraint violation.
    pub async fn insert(&self, title: &str, price_cents: i64) -> DbResult<CatalogItem> {
        let record = sqlx::query_as::<_, ItemRecord>(
            "INSERT INTO items (title, price_cents) VALUES (?1, ?2) \
             RETURNING id, title, price_cents",
        )
        .bind(title)
        .bind(price_cents)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = record.id, title = %record.title, "Inserted catalog item");
        Ok(record.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::error::DbError;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let db = test_db().await;
        let coffee = db.items().insert("Coffee", 250).await.unwrap();

        let found = db.items().get_by_id(coffee.id).await.unwrap();
        assert_eq!(found, Some(coffee));

        let missing = db.items().get_by_id(999).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_get_by_ids_skips_unknown() {
        let db = test_db().await;
        let repo = db.items();
        let coffee = repo.insert("Coffee", 250).await.unwrap();
        let tea = repo.insert("Tea", 175).await.unwrap();

        let found = repo.get_by_ids(&[coffee.id, tea.id, 999]).await.unwrap();
        assert_eq!(found.len(), 2);

        let none = repo.get_by_ids(&[999]).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_ids_empty_short_circuits() {
        let db = test_db().await;
        let found = db.items().get_by_ids(&[]).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_ordered_by_price_desc() {
        let db = test_db().await;
        let repo = db.items();
        repo.insert("Coffee", 250).await.unwrap();
        repo.insert("Tea", 175).await.unwrap();
        repo.insert("Cake", 999).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let prices: Vec<i64> = all.iter().map(|i| i.price_cents).collect();
        assert_eq!(prices, vec![999, 250, 175]);
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let db = test_db().await;
        let err = db.items().insert("Bad", -1).await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation { .. }));
    }
}
