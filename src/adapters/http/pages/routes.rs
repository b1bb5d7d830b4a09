//! Route configuration for page endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{app_page, health, index};

/// Creates the page router.
///
/// Stateless, so it merges into a router of any state type.
///
/// Routes:
/// - `GET /` - Landing page
/// - `GET /app` - Analyzer page with a fresh `app_id`
/// - `GET /health` - Liveness check
pub fn pages_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/app", get(app_page))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn index_serves_html() {
        let response = pages_router::<()>()
            .oneshot(get_request("/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn app_page_serves_html() {
        let response = pages_router::<()>()
            .oneshot(get_request("/app"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_serves_json() {
        let response = pages_router::<()>()
            .oneshot(get_request("/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
    }
}
