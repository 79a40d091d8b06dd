use crate::api::state::AppState;
use crate::api::{ApiError, ApiResponse};
use axum::extract::{Path, State};
use axum::Json;
use sitedesk_core::services;

/// POST /api/projects/{id}/report - generate a prose status report.
///
/// Degrades to fixed placeholder text when the text-generation capability is
/// unconfigured or failing; only an unknown project id surfaces as an error.
pub async fn generate_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let summary = services::report::generate_project_summary(&state, &id).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedesk_ai::MockTextGenerator;
    use sitedesk_core::services::report::{FAILED_SUMMARY, UNCONFIGURED_SUMMARY};
    use sitedesk_core::store::MockStore;
    use sitedesk_core::AppCore;
    use std::sync::Arc;
    use tempfile::tempdir;

    async fn create_test_state(generator: MockTextGenerator) -> AppState {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        Arc::new(
            AppCore::with_store(MockStore::seeded(), db_path.to_str().unwrap())
                .await
                .unwrap()
                .with_generator(Arc::new(generator)),
        )
    }

    #[tokio::test]
    async fn report_passes_generated_text_through() {
        let state = create_test_state(MockTextGenerator::with_response("Looking good.")).await;
        let body = generate_report(State(state), Path("proj-1".to_string()))
            .await
            .unwrap()
            .0;
        assert_eq!(body.data.unwrap(), "Looking good.");
    }

    #[tokio::test]
    async fn report_degrades_when_unconfigured() {
        let state = create_test_state(MockTextGenerator::unconfigured()).await;
        let body = generate_report(State(state), Path("proj-1".to_string()))
            .await
            .unwrap()
            .0;
        assert_eq!(body.data.unwrap(), UNCONFIGURED_SUMMARY);
    }

    #[tokio::test]
    async fn report_degrades_on_generation_failure() {
        let state = create_test_state(MockTextGenerator::failing()).await;
        let body = generate_report(State(state), Path("proj-1".to_string()))
            .await
            .unwrap()
            .0;
        assert_eq!(body.data.unwrap(), FAILED_SUMMARY);
    }

    #[tokio::test]
    async fn report_for_unknown_project_is_not_found() {
        let state = create_test_state(MockTextGenerator::with_response("ok")).await;
        let err = generate_report(State(state), Path("missing".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
