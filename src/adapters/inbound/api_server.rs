//! Map API Server
//!
//! HTTP API serving the interactive map page, the marker list and click
//! resolution.

use crate::adapters::inbound::map_page;
use crate::application::MapService;
use crate::domain::entities::ClickQuery;
use crate::domain::errors::ResolveError;
use crate::infrastructure::shutdown::ShutdownController;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub countries: usize,
    pub regions: usize,
    pub data_version: u64,
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<MapService>,
}

impl ApiState {
    pub fn new(service: Arc<MapService>) -> Self {
        Self { service }
    }
}

/// HTTP status for a failed click.
///
/// Missing data is a server-side condition; a bad coordinate is the client's.
pub fn status_for(err: &ResolveError) -> StatusCode {
    match err {
        ResolveError::EmptyCollection { .. } => StatusCode::SERVICE_UNAVAILABLE,
        ResolveError::InvalidCoordinate { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// API Server for the wine map.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
    cors_permissive: bool,
}

impl ApiServer {
    pub fn new(listen_addr: String, service: Arc<MapService>) -> Self {
        Self {
            listen_addr,
            state: ApiState::new(service),
            cors_permissive: false,
        }
    }

    /// Allow cross-origin requests from any origin.
    pub fn cors_permissive(mut self, enabled: bool) -> Self {
        self.cors_permissive = enabled;
        self
    }

    /// Build the router with all routes and layers.
    pub fn router(&self) -> Router {
        let router = Router::new()
            // Map page
            .route("/", get(index_handler))
            // Click resolution
            .route("/click", post(click_handler))
            // Markers
            .route("/api/v1/locations", get(locations_handler))
            // Health endpoint
            .route("/health", get(health_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone());

        if self.cors_permissive {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Run the API server until `shutdown` fires.
    pub async fn run(&self, shutdown: ShutdownController) -> anyhow::Result<()> {
        let app = self.router();

        let listener = TcpListener::bind(&self.listen_addr).await?;
        tracing::info!("wine map listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!("wine map server stopped");
        Ok(())
    }
}

// Handler functions

async fn index_handler() -> Html<String> {
    Html(map_page::render().into_string())
}

async fn click_handler(State(state): State<ApiState>, Json(query): Json<ClickQuery>) -> Response {
    match state.service.click(query).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => (
            status_for(&e),
            Json(serde_json::json!({
                "error": e.to_string()
            })),
        )
            .into_response(),
    }
}

async fn locations_handler(State(state): State<ApiState>) -> impl IntoResponse {
    Json(state.service.markers().await)
}

async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let (countries, regions) = state.service.dataset_sizes().await;
    let data_version = state.service.data_version().await;
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        countries,
        regions,
        data_version,
    };
    Json(response)
}
