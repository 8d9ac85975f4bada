//! HTTP route definitions.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

use super::handlers::{get_data, health, index, not_found, AppState};

/// Directory static assets are served from, relative to the working
/// directory.
pub const STATIC_DIR: &str = "static";

/// Create the application router.
///
/// Unmatched paths fall through to the 404 page; panics inside handlers
/// are converted to the 500 page instead of tearing down the connection.
pub fn create_router(state: AppState) -> Router {
    build_router(Router::new(), state)
}

/// Attach the application routes and layer stack to a base router.
fn build_router(router: Router<AppState>, state: AppState) -> Router {
    let debug = state.debug;

    router
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/data", get(get_data))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(debug, err),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the 500 response for a panicked handler.
///
/// In development mode the panic message is returned to the caller;
/// otherwise only the static error page goes out.
fn panic_response(debug: bool, err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    if debug {
        tracing::error!("handler panicked: {detail}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal Server Error: {detail}"),
        )
            .into_response()
    } else {
        AppError::Internal(detail).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::api::templates;

    async fn boom() -> &'static str {
        panic!("boom")
    }

    /// Router with an extra route that always panics, behind the same
    /// layer stack the application serves.
    fn router_with_panicking_route(state: AppState) -> Router {
        build_router(Router::new().route("/boom", get(boom)), state)
    }

    #[tokio::test]
    async fn index_returns_ok() {
        let app = create_router(AppState::new());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(AppState::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn data_endpoint_returns_ok() {
        let app = create_router(AppState::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/data")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unmatched_path_returns_not_found() {
        let app = create_router(AppState::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent-page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn panicking_handler_returns_500_page() {
        let app = router_with_panicking_route(AppState::new());

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(std::str::from_utf8(&body).unwrap(), templates::ERROR_500);
    }

    #[tokio::test]
    async fn panicking_handler_exposes_detail_in_development() {
        let app = router_with_panicking_route(AppState { debug: true });

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).unwrap().contains("boom"));
    }

    #[tokio::test]
    async fn panicking_handler_does_not_poison_later_requests() {
        let app = router_with_panicking_route(AppState::new());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn panic_response_hides_detail_in_production() {
        let response = panic_response(false, Box::new("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn panic_response_exposes_detail_in_development() {
        let response = panic_response(true, Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
