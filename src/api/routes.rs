//! API Routes
//!
//! Configures the Axum router for the demo endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, index_handler};
use crate::pipeline::CacheHeaders;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Index page
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Cache headers: the enabled validation and freshness stages
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(cache_headers: &CacheHeaders) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler));

    cache_headers
        .apply(router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::resolver::FixedResolver;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache_headers = CacheHeaders::builder(Config::default())
            .resolver(FixedResolver::from_timestamp(603559834))
            .build()
            .unwrap();
        create_router(&cache_headers)
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::LAST_MODIFIED],
            "Wed, 15 Feb 1989 15:30:34 GMT"
        );
        assert!(response.headers().contains_key(header::CACHE_CONTROL));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_conditional_index_not_modified() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::IF_MODIFIED_SINCE, "Wed, 15 Feb 1989 15:30:34 GMT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }
}
