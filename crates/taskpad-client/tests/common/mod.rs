/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskpad-client tests

use taskpad_client::ClientConfig;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration pointing at the mock server
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(server.uri())
}

/// Task objects shaped like the reference backend's output
pub fn sample_tasks() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "5b1f3c2e-0000-4000-8000-000000000001",
            "title": "Write report",
            "description": "Quarterly numbers",
            "priority": 2,
            "status": "PENDING",
            "due_date": "2025-03-01",
            "created_at": "2025-02-01T09:00:00",
            "updated_at": "2025-02-01T09:00:00"
        },
        {
            "id": "5b1f3c2e-0000-4000-8000-000000000002",
            "title": "Water plants",
            "description": null,
            "priority": 3,
            "status": "COMPLETED",
            "due_date": null,
            "created_at": "2025-02-02T09:00:00",
            "updated_at": "2025-02-03T09:00:00"
        }
    ])
}
