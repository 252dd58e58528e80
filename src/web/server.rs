use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::query::WsprLiveClient;

use super::api::telemetry as telemetry_handlers;
use super::api::track as track_handlers;
use super::api_doc::ApiDoc;

/// Shared by every request. Each request builds its own record lists.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<WsprLiveClient>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/telemetry", get(telemetry_handlers::get_telemetry))
        .route("/api/track", get(track_handlers::get_track))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config, client: WsprLiveClient) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let state = AppState {
        client: Arc::new(client),
    };
    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
