//! Message handling for the App.

use tracing::{debug, info, warn};

use super::{App, AppMessage, RequestSeq};
use crate::models::Answer;
use crate::query::QueryFailed;

impl App {
    /// Apply a message produced by a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::QueryCompleted { seq, result } => self.complete_query(seq, result),
        }
    }

    fn complete_query(&mut self, seq: RequestSeq, result: Result<Answer, QueryFailed>) {
        if self.latest_seq != Some(seq) || !self.state.is_pending() {
            debug!(%seq, latest = ?self.latest_seq.map(RequestSeq::value), "discarding stale completion");
            return;
        }

        self.in_flight = None;
        let state = std::mem::take(&mut self.state);
        self.state = match result {
            Ok(answer) => {
                info!(%seq, answer_len = answer.as_str().len(), "query succeeded");
                self.answer_scroll.reset();
                state.succeeded(answer)
            }
            Err(err) => {
                warn!(%seq, cause = %err.cause(), "query failed");
                state.failed()
            }
        };
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::app::test_support::app_with_mock;
    use crate::app::{RequestState, SubmitOutcome, SubmitPolicy};
    use serde_json::json;

    #[tokio::test]
    async fn test_success_message_stores_answer() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(MockResponse::json(200, json!({"answer": "A"})));

        app.set_question("Q");
        let SubmitOutcome::Accepted(seq) = app.submit() else {
            panic!("submit should be accepted");
        };

        app.handle_message(AppMessage::QueryCompleted {
            seq,
            result: Ok(Answer::new("A")),
        });

        assert_eq!(app.state().request(), RequestState::Succeeded);
        assert_eq!(app.state().answer(), "A");
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_new_answer_starts_at_top() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(MockResponse::json(200, json!({"answer": "A"})));

        let SubmitOutcome::Accepted(first) = app.submit() else {
            panic!("submit should be accepted");
        };
        app.handle_message(AppMessage::QueryCompleted {
            seq: first,
            result: Ok(Answer::new("long")),
        });
        app.set_answer_bounds(30, 10);
        app.answer_scroll.page_down();
        assert_eq!(app.answer_scroll().offset(), 10);

        let SubmitOutcome::Accepted(second) = app.submit() else {
            panic!("submit should be accepted");
        };
        app.handle_message(AppMessage::QueryCompleted {
            seq: second,
            result: Ok(Answer::new("another")),
        });
        assert_eq!(app.answer_scroll().offset(), 0);
    }

    #[tokio::test]
    async fn test_failure_message_keeps_answer() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(MockResponse::json(500, json!({})));

        let SubmitOutcome::Accepted(first) = app.submit() else {
            panic!("submit should be accepted");
        };
        app.handle_message(AppMessage::QueryCompleted {
            seq: first,
            result: Ok(Answer::new("kept")),
        });

        let SubmitOutcome::Accepted(second) = app.submit() else {
            panic!("submit should be accepted");
        };
        app.handle_message(AppMessage::QueryCompleted {
            seq: second,
            result: Err(QueryFailed::status(500)),
        });

        assert_eq!(app.state().request(), RequestState::Failed);
        assert_eq!(app.state().answer(), "kept");
    }

    #[tokio::test]
    async fn test_unknown_seq_is_ignored() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(MockResponse::json(200, json!({"answer": "A"})));

        let SubmitOutcome::Accepted(seq) = app.submit() else {
            panic!("submit should be accepted");
        };

        app.handle_message(AppMessage::QueryCompleted {
            seq: seq.next(),
            result: Ok(Answer::new("from nowhere")),
        });

        assert!(app.state().is_pending());
        assert_eq!(app.state().answer(), "");
    }

    #[tokio::test]
    async fn test_completion_after_settle_is_ignored() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(MockResponse::json(200, json!({"answer": "A"})));

        let SubmitOutcome::Accepted(seq) = app.submit() else {
            panic!("submit should be accepted");
        };
        app.handle_message(AppMessage::QueryCompleted {
            seq,
            result: Ok(Answer::new("A")),
        });
        app.handle_message(AppMessage::QueryCompleted {
            seq,
            result: Err(QueryFailed::status(502)),
        });

        assert_eq!(app.state().request(), RequestState::Succeeded);
        assert_eq!(app.state().answer(), "A");
    }
}
