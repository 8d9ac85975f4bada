//! HTTP request handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;

use crate::config::Config;

use super::templates;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "hurcules-web-app";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether verbose error reporting is enabled (development mode).
    pub debug: bool,
}

impl AppState {
    /// Create new app state with production defaults.
    pub fn new() -> Self {
        Self { debug: false }
    }

    /// Derive app state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            debug: config.is_development(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Service identifier.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Sample data response.
#[derive(Debug, Serialize)]
pub struct DataResponse {
    /// Greeting message.
    pub message: &'static str,
    /// Fixed timestamp string.
    pub timestamp: &'static str,
}

/// Landing page handler.
pub async fn index() -> Html<&'static str> {
    Html(templates::INDEX)
}

/// Health check handler - always returns 200.
///
/// The body is rebuilt per request; there is no cached state behind it.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Sample data handler. Both fields are constants, so repeated requests
/// return byte-identical bodies.
pub async fn get_data() -> impl IntoResponse {
    Json(DataResponse {
        message: "Hello from Hurcules Web App!",
        timestamp: "2024-01-01T00:00:00Z",
    })
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(templates::ERROR_404))
}
