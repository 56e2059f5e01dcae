//! Mock transport configuration for integration tests.

pub use ask_tui::adapters::mock::{MockHttpClient, MockResponse};
pub use ask_tui::traits::{HttpError, Response};

use std::time::Duration;

/// Builder over [`MockHttpClient`] for the answer endpoint.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

#[allow(dead_code)]
impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Every request gets `{"answer": answer}` with status 200.
    pub fn with_answer(self, answer: &str) -> Self {
        self.client.set_default_response(MockResponse::json(
            200,
            serde_json::json!({ "answer": answer }),
        ));
        self
    }

    /// Every request gets `json` with `status`.
    pub fn with_json(self, status: u16, json: serde_json::Value) -> Self {
        self.client
            .set_default_response(MockResponse::json(status, json));
        self
    }

    /// Every request gets a raw body with `status`.
    pub fn with_body(self, status: u16, body: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Success(Response::new(status, body.to_string())));
        self
    }

    /// Every request fails before reaching the server.
    pub fn with_transport_error(self) -> Self {
        self.client.set_default_response(MockResponse::Error(
            HttpError::ConnectionFailed("connection refused".to_string()),
        ));
        self
    }

    /// The next request gets `{"answer": answer}` after `delay`.
    pub fn then_delayed_answer(self, answer: &str, delay: Duration) -> Self {
        self.client.queue_response(
            super::ENDPOINT,
            MockResponse::json(200, serde_json::json!({ "answer": answer })).delayed(delay),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
