//! HTTP adapter for the static pages and health check.

pub mod handlers;
pub mod routes;

pub use handlers::not_found;
pub use routes::pages_router;
