use crate::api::state::AppState;
use crate::api::{ApiError, ApiResponse};
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use sitedesk_core::User;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// POST /api/auth/login - establish a session by email.
///
/// Unknown emails fall back to the default demo user rather than failing;
/// the only error case is an empty user collection.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    match state.session.login(&request.email) {
        Some(user) => Ok(Json(ApiResponse::ok(user))),
        None => Err(ApiError::NotFound("No users available".to_string())),
    }
}

/// POST /api/auth/logout - clear the session and its persisted snapshot.
pub async fn logout(State(state): State<AppState>) -> Json<ApiResponse<()>> {
    state.session.logout();
    Json(ApiResponse::message("Logged out"))
}

/// GET /api/auth/session - the current session subject, if any.
pub async fn session(State(state): State<AppState>) -> Json<ApiResponse<Option<User>>> {
    Json(ApiResponse::ok(state.session.current_user()))
}
