//! Main application router.

use crate::{
    controllers::{cache_controller, health_controller, product_controller, product_type_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, routing::get, Router};
use catalog_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router.
///
/// `request_logging` adds a per-request summary line on top of the trace layer.
pub fn create_router(state: AppState, server_config: &ServerConfig, request_logging: bool) -> Router {
    let api = Router::new()
        .merge(health_controller::router())
        .merge(product_controller::router())
        .merge(product_type_controller::router())
        .merge(cache_controller::router())
        .with_state(state);

    let mut router = Router::new().merge(api).route("/", get(root));

    if server_config.swagger_enabled {
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
        info!("Swagger UI available at /swagger-ui");
    }

    router = router
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http());

    if request_logging {
        router = router.layer(middleware::from_fn(logging_middleware));
    }
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }
    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Product Catalog API"
}
