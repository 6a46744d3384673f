//! Integration tests per GET /health

mod common;

#[cfg(test)]
mod health_tests {
    use super::common::*;
    use chrono::{DateTime, Utc};

    #[tokio::test]
    async fn test_health_ok() {
        let server = create_test_server(create_memory_state());

        let before = Utc::now();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "OK");

        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(timestamp.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(timestamp).unwrap();
        // precisione al millisecondo
        assert!(parsed.with_timezone(&Utc) >= before - chrono::Duration::milliseconds(1));
    }

    #[tokio::test]
    async fn test_health_with_unavailable_storage() {
        let server = create_test_server(create_test_state(UnavailableStore));

        server.get("/health").await.assert_status_ok();
    }
}
