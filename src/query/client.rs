//! HTTP client for the answering service.

use std::sync::Arc;

use tracing::debug;

use super::QueryFailed;
use crate::adapters::ReqwestHttpClient;
use crate::models::{Answer, AskRequest, AskResponse};
use crate::traits::{Headers, HttpClient};

/// Default endpoint of the answering service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/ask";

/// Performs one `POST {"question"}` → `{"answer"}` exchange per call.
///
/// No retries, no caching, no timeout of its own.
#[derive(Clone)]
pub struct QueryClient {
    endpoint: String,
    http: Arc<dyn HttpClient>,
}

impl QueryClient {
    /// Create a client for `endpoint` over the given transport.
    pub fn new(endpoint: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Create a client using the reqwest transport.
    pub fn with_reqwest(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, Arc::new(ReqwestHttpClient::new()))
    }

    /// Ask the service a question.
    ///
    /// Issues exactly one request. Any transport error, non-2xx status, or body
    /// without a string `answer` comes back as [`QueryFailed`].
    pub async fn ask(&self, question: &str) -> Result<Answer, QueryFailed> {
        let body =
            serde_json::to_string(&AskRequest::new(question)).map_err(QueryFailed::malformed)?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        debug!(endpoint = %self.endpoint, question_len = question.len(), "posting question");

        let response = self
            .http
            .post(&self.endpoint, &body, &headers)
            .await
            .map_err(QueryFailed::transport)?;

        if !response.is_success() {
            return Err(QueryFailed::status(response.status));
        }

        let parsed: AskResponse = response.json().map_err(QueryFailed::malformed)?;
        Ok(Answer::new(parsed.answer))
    }
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
