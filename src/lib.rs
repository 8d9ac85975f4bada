//! Hurcules web application.
//!
//! A small HTTP service exposing a landing page, a health check for the
//! hosting platform, and a static JSON data endpoint, plus rendered 404/500
//! error pages and verbatim static assets.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Router and request handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
