//! The single failure kind of the query client.

use thiserror::Error;

use crate::traits::HttpError;

/// Why a query failed. Kept for logs only; callers handle every cause the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(HttpError),

    /// The service answered with a non-2xx status; the body is not inspected
    #[error("answering service returned HTTP {0}")]
    Status(u16),

    /// A 2xx body that is not `{"answer": <string>}`
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The query panicked before producing a result
    #[error("query panicked")]
    Panicked,
}

/// Raised by [`super::QueryClient::ask`] for any transport error, non-success
/// status, or malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("query failed: {cause}")]
pub struct QueryFailed {
    cause: FailureCause,
}

impl QueryFailed {
    pub fn transport(err: HttpError) -> Self {
        Self {
            cause: FailureCause::Transport(err),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            cause: FailureCause::Status(status),
        }
    }

    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self {
            cause: FailureCause::Malformed(err.to_string()),
        }
    }

    pub fn panicked() -> Self {
        Self {
            cause: FailureCause::Panicked,
        }
    }

    pub fn cause(&self) -> &FailureCause {
        &self.cause
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        assert_eq!(
            QueryFailed::status(500).to_string(),
            "query failed: answering service returned HTTP 500"
        );
        assert_eq!(
            QueryFailed::transport(HttpError::ConnectionFailed("refused".into())).to_string(),
            "query failed: transport error: Connection failed: refused"
        );
        assert!(QueryFailed::malformed("missing field `answer`")
            .to_string()
            .contains("missing field `answer`"));
        assert_eq!(QueryFailed::panicked().to_string(), "query failed: query panicked");
    }

    #[test]
    fn test_cause_accessor() {
        assert_eq!(QueryFailed::status(422).cause(), &FailureCause::Status(422));
    }
}
