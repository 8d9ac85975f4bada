//! Unified error types for the web app.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::api::templates;

/// Unified error type for the web app.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Unhandled fault during request handling.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    /// Any request-time error becomes the rendered 500 page. The error
    /// detail is logged, never sent to the caller.
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(templates::ERROR_500),
        )
            .into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
