//! # kassa-server: HTTP Receipt Service
//!
//! The application layer of Kassa. Wires the pure core and the catalog
//! database into an axum HTTP service.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 POST /cash_machine/ (create receipt)                    │
//! │                                                                         │
//! │  {"items": [1, 1, 2]}                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  routes ──► pipeline:                                                  │
//! │    catalog lookup (kassa-db)                                           │
//! │       ─► aggregate + compose (kassa-core)                              │
//! │       ─► render PDF (render)                                           │
//! │       ─► persist + URL (store)                                         │
//! │       ─► QR encode URL (qr)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  200 OK, image/png  (QR code pointing at the stored receipt PDF)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each stage failure aborts the rest of the pipeline. A document stored
//! before a later failure stays persisted; the store is append-only and
//! nothing here deletes.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pipeline;
pub mod qr;
pub mod render;
pub mod routes;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::AppConfig;
pub use error::ApiError;
pub use pipeline::{PipelineError, ReceiptPipeline};
pub use routes::{create_router, AppState};
pub use store::DocumentStore;
