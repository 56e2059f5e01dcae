use serde::{Deserialize, Serialize};

/// Body of the POST sent to the answering service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AskRequest<'a> {
    /// The question exactly as the user typed it, empty included
    pub question: &'a str,
}

impl<'a> AskRequest<'a> {
    pub fn new(question: &'a str) -> Self {
        Self { question }
    }
}

/// Body expected back on a 2xx response.
///
/// Unknown fields are ignored; a missing or non-string `answer` fails
/// deserialization.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_request_serializes_single_field() {
        let json = serde_json::to_value(AskRequest::new("What is churn?")).unwrap();
        assert_eq!(json, serde_json::json!({"question": "What is churn?"}));
    }

    #[test]
    fn test_ask_request_keeps_empty_and_non_ascii() {
        let empty = serde_json::to_string(&AskRequest::new("")).unwrap();
        assert_eq!(empty, r#"{"question":""}"#);

        let value = serde_json::to_value(AskRequest::new("¿Qué es churn? 顧客")).unwrap();
        assert_eq!(value["question"], "¿Qué es churn? 顧客");
    }

    #[test]
    fn test_ask_response_ignores_extra_fields() {
        let parsed: AskResponse =
            serde_json::from_str(r#"{"answer": "A", "sources": []}"#).unwrap();
        assert_eq!(parsed.answer, "A");
    }

    #[test]
    fn test_ask_response_rejects_missing_or_null_answer() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"detail": "x"}"#).is_err());
        assert!(serde_json::from_str::<AskResponse>(r#"{"answer": null}"#).is_err());
        assert!(serde_json::from_str::<AskResponse>(r#"{"answer": 42}"#).is_err());
    }
}
