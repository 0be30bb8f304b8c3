//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use edumat_activities::ActivityService;
use edumat_core::EdumatConfig;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    pub config: EdumatConfig,
    /// The activity service — store access plus analytics publishing.
    pub service: Arc<ActivityService>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(config: EdumatConfig) -> Self {
        let service = Arc::new(ActivityService::new(&config));
        Self {
            config,
            service,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let shared = Arc::new(state);

    Router::new()
        .route("/", get(super::routes::index_page))
        .route("/config", get(super::routes::config_page))
        .route("/json_params", get(super::routes::json_params))
        .route("/analytics_list", get(super::routes::analytics_list))
        .route("/analytics", get(super::routes::analytics_data))
        .route("/user_url", get(super::routes::user_url))
        .route("/deploy", post(super::routes::deploy))
        .route("/activity", get(super::routes::activity_page))
        .route("/health", get(super::routes::health_check))
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server.
pub async fn start(config: EdumatConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 EduMat gateway listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
