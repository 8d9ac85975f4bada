//! HTTP API module for the landing page, health, and data endpoints.

pub mod handlers;
pub mod routes;
pub mod templates;

pub use handlers::AppState;
pub use routes::create_router;
