//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{
    achievements, hello, metrics_scrape, root, site_content, test_database, track_metrics,
    AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Greetings
        .route("/", get(root))
        .route("/api/hello", get(hello))
        // Diagnostics
        .route("/test", get(test_database))
        // Content
        .route("/api/site", get(site_content))
        .route("/api/achievements", get(achievements))
        .route_layer(middleware::from_fn(track_metrics))
        // Ops
        .route("/metrics", get(metrics_scrape))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Every origin, method and header, with credentials.
///
/// Browsers reject a literal `*` alongside credentials, so all three are
/// mirrored back from the request instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
