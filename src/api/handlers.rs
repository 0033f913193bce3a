//! API Handlers
//!
//! HTTP request handlers for the demo endpoints.

use axum::Json;
use tracing::debug;

use crate::models::{HealthResponse, PageResponse};

/// Handler for GET /
///
/// Not reached when the validation stage answers with 304.
pub async fn index_handler() -> Json<PageResponse> {
    debug!("Rendering index page");
    Json(PageResponse::new("Hello from last_modified"))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_handler() {
        let response = index_handler().await;
        assert!(response.message.contains("last_modified"));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
