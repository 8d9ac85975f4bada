//! Server-rendered HTML pages, compiled into the binary.
//!
//! None of the pages take template variables, so they are embedded as
//! plain strings rather than going through a template engine.

/// Landing page.
pub const INDEX: &str = include_str!("../../templates/index.html");

/// Page returned for unmatched routes.
pub const ERROR_404: &str = include_str!("../../templates/404.html");

/// Page returned for unhandled server faults.
pub const ERROR_500: &str = include_str!("../../templates/500.html");
