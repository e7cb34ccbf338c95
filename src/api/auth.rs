use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ApiError, ApiJson, ApiResponse, AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub name: String,
    pub login_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCheckRequest {
    pub login_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCheckResponse {
    pub valid: bool,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /auth/login
/// Checks the admin credentials and hands back the login time for the client to keep.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let session = match state
        .admin_auth()
        .login(&payload.name, &payload.password, Utc::now())
    {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "Admin login rejected");
            return Err(e.into());
        }
    };

    tracing::info!("Admin logged in");

    Ok(Json(ApiResponse::success(LoginResponse {
        name: payload.name.trim().to_string(),
        login_at: session.login_at,
        expires_at: session.expires_at,
    })))
}

/// POST /auth/session
/// Reports whether a stored login time is still inside the session window.
pub async fn check_session(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SessionCheckRequest>,
) -> Json<ApiResponse<SessionCheckResponse>> {
    let auth = state.admin_auth();
    let session = auth.session_at(payload.login_at);

    Json(ApiResponse::success(SessionCheckResponse {
        valid: auth.is_session_valid(payload.login_at, Utc::now()),
        expires_at: session.expires_at,
    }))
}
