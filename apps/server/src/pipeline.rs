//! # Receipt Pipeline
//!
//! Orchestrates the end-to-end "create receipt" operation.
//!
//! ## State Machine (per request)
//! ```text
//! Received ─► Aggregated ─► Composed ─► Rendered ─► Stored ─► Encoded ─► Responded
//!     │            │            │           │           │          │
//!     └────────────┴────────────┴───────────┴───────────┴──────────┴──► Failed
//! ```
//! Linear, no branching, no retries. Any stage failure aborts the rest of
//! the pipeline. There is deliberately no transaction across stages: a
//! document stored before a later QR failure stays persisted (orphaned),
//! the documented tradeoff of the linear pipeline.

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};

use kassa_core::receipt::{compose_receipt, count_quantities, resolve_items};
use kassa_db::{DbError, ItemRepository};

use crate::qr::{encode_url, QrEncodeError};
use crate::render::{render_pdf, RenderError};
use crate::store::{DocumentStore, StoreError};

// =============================================================================
// Errors
// =============================================================================

/// A stage failure inside the receipt pipeline.
///
/// Each variant corresponds to exactly one stage. All of them are server
/// faults; any purchase shape the body parser accepts is a valid request.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Catalog lookup failed.
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] DbError),

    /// PDF rendering failed.
    #[error("Receipt rendering failed: {0}")]
    Render(#[from] RenderError),

    /// Document persistence failed. Nothing was returned to the client;
    /// no URL exists for a document that was never written.
    #[error("Document storage failed: {0}")]
    Store(#[from] StoreError),

    /// QR encoding failed. The document may already be stored (orphan).
    #[error("QR encoding failed: {0}")]
    Encode(#[from] QrEncodeError),
}

// =============================================================================
// Pipeline
// =============================================================================

/// The receipt creation pipeline: catalog lookup, aggregation, composition,
/// rendering, storage, QR encoding.
///
/// Holds no request state; one instance serves all requests concurrently.
#[derive(Debug, Clone)]
pub struct ReceiptPipeline {
    items: ItemRepository,
    store: DocumentStore,
}

impl ReceiptPipeline {
    /// Creates a pipeline over the given catalog repository and document
    /// store.
    pub fn new(items: ItemRepository, store: DocumentStore) -> Self {
        ReceiptPipeline { items, store }
    }

    /// Runs the full pipeline for one request and returns the QR PNG bytes.
    ///
    /// Unknown item ids are dropped (documented policy); an input with no
    /// known ids still produces a valid empty receipt, document, and QR.
    pub async fn create_receipt(&self, item_ids: &[i64]) -> Result<Vec<u8>, PipelineError> {
        // Aggregate raw ids into (id, quantity) in first-seen order, then
        // resolve against the catalog with one batched lookup.
        let counts = count_quantities(item_ids);
        let distinct: Vec<i64> = counts.iter().map(|&(id, _)| id).collect();
        let catalog_items = self.items.get_by_ids(&distinct).await?;

        let resolution = resolve_items(&counts, &catalog_items);
        if !resolution.unresolved.is_empty() {
            debug!(unresolved = ?resolution.unresolved, "Dropping unknown item ids");
        }

        let receipt = compose_receipt(&resolution, Local::now().naive_local());
        debug!(
            lines = receipt.line_count(),
            grand_total = %receipt.grand_total,
            "Receipt composed"
        );

        let pdf = render_pdf(&receipt)?;
        let stored = self.store.store(&pdf).await?;
        let png = encode_url(&stored.public_url)?;

        info!(
            lines = receipt.line_count(),
            grand_total = %receipt.grand_total,
            document = %stored.storage_name,
            "Receipt created"
        );
        Ok(png)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
