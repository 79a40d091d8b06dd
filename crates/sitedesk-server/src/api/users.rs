use crate::api::state::AppState;
use crate::api::{ApiError, ApiResponse};
use axum::extract::{Path, State};
use axum::Json;
use sitedesk_core::{services, NewUser, User};

/// GET /api/users - list all users
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    Json(ApiResponse::ok(services::user::list_users(&state).await))
}

/// POST /api/users - create a user; the store assigns id and avatar
pub async fn add_user(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> Json<ApiResponse<User>> {
    Json(ApiResponse::ok(
        services::user::add_user(&state, new_user).await,
    ))
}

/// PUT /api/users/{id} - replace a user record
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut user): Json<User>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    // The path is canonical for the target id.
    user.id = id;
    let updated = services::user::update_user(&state, user).await?;
    Ok(Json(ApiResponse::ok(updated)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    services::user::delete_user(&state, &id).await?;
    Ok(Json(ApiResponse::message("User deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedesk_core::store::MockStore;
    use sitedesk_core::{AccessLevel, AppCore, UserRole};
    use std::sync::Arc;
    use tempfile::tempdir;

    async fn create_test_state() -> AppState {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        Arc::new(
            AppCore::with_store(MockStore::seeded(), db_path.to_str().unwrap())
                .await
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn add_then_list_round_trip() {
        let state = create_test_state().await;
        let before = list_users(State(state.clone())).await.0.data.unwrap().len();

        let created = add_user(
            State(state.clone()),
            Json(NewUser {
                name: "New Member".to_string(),
                email: "new@sitedesk.dev".to_string(),
                mobile: None,
                role: UserRole::Member,
                access: AccessLevel::ReadWrite,
                specialty: None,
            }),
        )
        .await
        .0
        .data
        .unwrap();

        let after = list_users(State(state)).await.0.data.unwrap();
        assert_eq!(after.len(), before + 1);
        assert!(after.iter().any(|u| u.id == created.id));
    }

    #[tokio::test]
    async fn update_uses_path_id() {
        let state = create_test_state().await;
        let mut user = state.store.list_users()[0].clone();
        let id = user.id.clone();
        user.id = "ignored".to_string();
        user.name = "Renamed".to_string();

        let updated = update_user(State(state.clone()), Path(id.clone()), Json(user))
            .await
            .unwrap()
            .0
            .data
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Renamed");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let state = create_test_state().await;
        let user = state.store.list_users()[0].clone();

        let err = update_user(State(state), Path("missing".to_string()), Json(user))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_idempotent_failing() {
        let state = create_test_state().await;

        delete_user(State(state.clone()), Path("5".to_string()))
            .await
            .unwrap();
        let err = delete_user(State(state), Path("5".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
