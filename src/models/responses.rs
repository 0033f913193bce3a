//! Response DTOs for the demo server
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the index page (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    /// Greeting text
    pub message: String,
    /// When the handler actually ran, in ISO 8601 format
    pub rendered_at: String,
}

impl PageResponse {
    /// Creates a new PageResponse stamped with the current time
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rendered_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_serialize() {
        let resp = PageResponse::new("hello");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("hello"));
        assert!(json.contains("rendered_at"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
