//! HTTP API module for content, diagnostics, docs and metrics endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
