use crate::api::state::AppState;
use crate::api::{ApiError, ApiResponse};
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use sitedesk_core::{services, Project, TimelineEvent};

/// GET /api/projects - list all projects
pub async fn list_projects(State(state): State<AppState>) -> Json<ApiResponse<Vec<Project>>> {
    Json(ApiResponse::ok(
        services::project::list_projects(&state).await,
    ))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    match services::project::get_project(&state, &id).await {
        Some(project) => Ok(Json(ApiResponse::ok(project))),
        None => Err(ApiError::NotFound(format!("Project not found: {id}"))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimelineEventRequest {
    pub event: TimelineEvent,
    /// Acting user when no session is established.
    #[serde(default)]
    pub editor_id: Option<String>,
}

/// PUT /api/projects/{id}/timeline/{event_id} - replace a timeline event,
/// stamping the acting user and the current time.
pub async fn update_timeline_event(
    State(state): State<AppState>,
    Path((project_id, event_id)): Path<(String, String)>,
    Json(request): Json<UpdateTimelineEventRequest>,
) -> Result<Json<ApiResponse<TimelineEvent>>, ApiError> {
    let mut event = request.event;
    // The path is canonical for the target event id.
    event.id = event_id;

    let editor_id = state
        .session
        .current_user()
        .map(|u| u.id)
        .or(request.editor_id)
        .ok_or_else(|| {
            ApiError::BadRequest("No active session and no editorId provided".to_string())
        })?;

    let updated =
        services::project::update_timeline_event(&state, &project_id, event, &editor_id).await?;
    Ok(Json(ApiResponse::ok(updated)))
}
