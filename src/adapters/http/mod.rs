//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter; [`app_router`] assembles them with
//! the shared middleware stack.

pub mod analysis;
pub mod pages;

// Re-export key types for convenience
pub use analysis::analysis_router;
pub use analysis::AnalysisAppState;
pub use pages::pages_router;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use http::{header, HeaderValue, Method, StatusCode};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use analysis::dto::{ErrorResponse, GenerateAnalysisResponse};

const TIMEOUT_MESSAGE: &str = "Request timed out";

/// Builds the full application router.
///
/// Unknown paths fall through to the static not-found page.
pub fn app_router(state: AnalysisAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(pages_router())
        .merge(analysis_router())
        .fallback(pages::not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(middleware::from_fn(timeout_as_json_error))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Replaces the timeout layer's empty 408 with the route's JSON error shape.
async fn timeout_as_json_error(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    tracing::error!(%path, "Request exceeded the server timeout");
    if path == "/api/generate_analysis" {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GenerateAnalysisResponse::failed(TIMEOUT_MESSAGE)),
        )
            .into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(TIMEOUT_MESSAGE)),
        )
            .into_response()
    }
}

/// CORS for the configured origins; any origin when none are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}
