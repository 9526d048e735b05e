//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::dto::{DataListResponse, HealthResponse, SyncRequest, SyncResponse};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Synchronizer
// =============================================================================

/// POST /api/v1/synchronizer/data
///
/// Generate the period hierarchy for the requested range. The reference
/// instant is read once per request from the state's clock.
pub async fn sync_data(
    State(state): State<AppState>,
    body: Result<Json<SyncRequest>, JsonRejection>,
) -> HandlerResult<SyncResponse> {
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let response = services::generate_periods(&request, state.clock.now(), &state.settings)?;
    Ok(Json(response))
}

/// POST /api/v1/synchronizer/datalist
///
/// List selectable timezones.
pub async fn list_timezones() -> HandlerResult<DataListResponse> {
    Ok(Json(DataListResponse {
        items: services::list_timezones(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
