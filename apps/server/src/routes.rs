//! # HTTP Routes
//!
//! The REST surface of the receipt service.
//!
//! | Method | Path             | Success response                        |
//! |--------|------------------|-----------------------------------------|
//! | POST   | `/cash_machine/` | `200`, `image/png` QR of document URL   |
//! | GET    | `/cash_machine/` | `200`, JSON `[{id, name, price}, ...]`  |
//!
//! ## Malformed Bodies
//! A missing or wrong-typed `items` field is a hard `400` with a JSON
//! error body naming the problem. The service never silently treats a
//! malformed request as an empty purchase.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use kassa_core::CatalogItemDto;
use kassa_db::ItemRepository;

use crate::error::ApiError;
use crate::pipeline::ReceiptPipeline;

// =============================================================================
// State
// =============================================================================

/// Shared state for all routes.
///
/// Both fields are cheap clones over shared pools; axum clones the state
/// per request.
#[derive(Clone)]
pub struct AppState {
    /// Catalog repository, for the listing endpoint.
    pub items: ItemRepository,

    /// The receipt creation pipeline.
    pub pipeline: ReceiptPipeline,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cash_machine/", get(list_items).post(create_receipt))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Request body for receipt creation.
#[derive(Debug, Deserialize)]
pub struct CreateReceiptRequest {
    /// Ordered item ids; repeats express quantity.
    pub items: Vec<i64>,
}

/// `POST /cash_machine/`: run the receipt pipeline, answer with QR PNG.
async fn create_receipt(
    State(state): State<AppState>,
    payload: Result<Json<CreateReceiptRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // Strict body policy: surface the extractor's reason as a 400 instead
    // of defaulting `items` to empty.
    let Json(body) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let png = state.pipeline.create_receipt(&body.items).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// `GET /cash_machine/`: list the catalog, most expensive first.
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<CatalogItemDto>>, ApiError> {
    let items = state.items.list_all().await?;
    Ok(Json(items.iter().map(CatalogItemDto::from).collect()))
}
