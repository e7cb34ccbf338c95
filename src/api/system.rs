//! System API endpoints.

use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, SystemStatusDto};

/// Returns version, active backend and catalog size.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatusDto>>, ApiError> {
    let catalog = state.catalog();
    let product_count = catalog.list_products().await?.len();

    Ok(Json(ApiResponse::success(SystemStatusDto {
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: catalog.backend_name().to_string(),
        product_count,
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })))
}
