//! Router configuration for the Web API.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{CreateLetterRequest, CreateLetterResponse, DispatchResponse};
use super::handlers::{create_letter, dispatch_letters, AppState};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/letters", post(create_letter))
        .route("/letters/dispatch", post(dispatch_letters));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::letters::create_letter,
        super::handlers::letters::dispatch_letters,
    ),
    components(schemas(CreateLetterRequest, CreateLetterResponse, DispatchResponse)),
    tags(
        (name = "letters", description = "Delayed letter intake and dispatch")
    )
)]
struct ApiDoc;

/// Create the Swagger UI router.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
