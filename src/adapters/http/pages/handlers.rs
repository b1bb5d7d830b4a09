//! HTTP handlers for the static pages.
//!
//! Templates are compiled into the binary; the app page gets a fresh
//! `app_id` on every request.

use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("../../../../templates/index.html");
const APP_HTML: &str = include_str!("../../../../templates/app.html");
const NOT_FOUND_HTML: &str = include_str!("../../../../templates/404.html");

/// Placeholder replaced with the per-request identifier.
pub const APP_ID_PLACEHOLDER: &str = "{{app_id}}";

/// GET / - Landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /app - Analyzer page
pub async fn app_page() -> Html<String> {
    Html(render_app_page(&Uuid::new_v4()))
}

/// Fallback for unknown paths
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn render_app_page(app_id: &Uuid) -> String {
    APP_HTML.replace(APP_ID_PLACEHOLDER, &app_id.to_string())
}
