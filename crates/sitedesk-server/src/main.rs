#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod api;

use api::state::AppState;
use api::{auth, projects, reports, users};
use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::Router;
use sitedesk_core::{paths, AppCore};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "sitedesk is working!".to_string(),
    })
}

fn router(state: AppState) -> Router {
    // Wide-open CORS: the dashboard frontend is served from anywhere in demo
    // deployments.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        // Projects (read-only except the timeline)
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/{id}", get(projects::get_project))
        .route(
            "/api/projects/{id}/timeline/{event_id}",
            put(projects::update_timeline_event),
        )
        .route("/api/projects/{id}/report", post(reports::generate_report))
        // User management
        .route("/api/users", get(users::list_users).post(users::add_user))
        .route(
            "/api/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        // Session
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::session))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sitedesk_server=debug".into()),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting SiteDesk backend server");

    let db_path = paths::ensure_database_path_string()
        .expect("Failed to determine SiteDesk database path");
    let core = Arc::new(
        AppCore::new(&db_path)
            .await
            .expect("Failed to initialize app core"),
    );

    let app = router(core);

    let addr = std::env::var("SITEDESK_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {addr}: {e}"));

    tracing::info!("SiteDesk running on http://{addr}");

    axum::serve(listener, app)
        .await
        .expect("Failed to run axum server");
}
