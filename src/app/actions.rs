//! User-triggered operations on the App.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info};

use super::{App, AppMessage, InFlight, RequestSeq, SubmitOutcome, SubmitPolicy};
use crate::input::InputAction;
use crate::query::QueryFailed;

impl App {
    /// Replace the question text and the edit buffer behind it.
    pub fn set_question(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.input_box.set_content(text.clone());
        self.state = std::mem::take(&mut self.state).with_question(text);
        self.mark_dirty();
    }

    pub fn clear_question(&mut self) {
        self.input_box.clear();
        self.sync_question();
    }

    /// Send the current question to the answering service.
    ///
    /// The query runs on a spawned task; its result comes back as
    /// [`AppMessage::QueryCompleted`] and is applied by `handle_message`.
    /// A panic inside the query still reports a failure. An aborted task
    /// reports nothing. Must be called from inside a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_pending() {
            match self.submit_policy {
                SubmitPolicy::RejectWhilePending => {
                    debug!(pending = ?self.latest_seq.map(RequestSeq::value), "submit rejected");
                    return SubmitOutcome::Rejected;
                }
                SubmitPolicy::Supersede => {
                    if let Some(prev) = self.in_flight.take() {
                        debug!(seq = %prev.seq, "superseding pending query");
                        prev.handle.abort();
                    }
                }
            }
        }

        let seq = self.latest_seq.map_or(RequestSeq::FIRST, RequestSeq::next);
        self.latest_seq = Some(seq);

        let question = self.state.question().to_string();
        info!(%seq, question_len = question.len(), "submitting question");

        self.state = std::mem::take(&mut self.state).pending();

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let handle = tokio::spawn(async move {
            let result = AssertUnwindSafe(client.ask(&question))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    error!(%seq, "query panicked");
                    Err(QueryFailed::panicked())
                });
            let _ = tx.send(AppMessage::QueryCompleted { seq, result });
        });
        self.in_flight = Some(InFlight { seq, handle });

        self.mark_dirty();
        SubmitOutcome::Accepted(seq)
    }

    /// Dispatch an action produced by the key mapper.
    pub fn apply_action(&mut self, action: InputAction) {
        match action {
            InputAction::Insert(c) => {
                self.input_box.insert_char(c);
                self.sync_question();
            }
            InputAction::Paste(text) => {
                self.input_box.insert_str(&text);
                self.sync_question();
            }
            InputAction::Backspace => {
                self.input_box.backspace();
                self.sync_question();
            }
            InputAction::Delete => {
                self.input_box.delete_char();
                self.sync_question();
            }
            InputAction::CursorLeft => {
                self.input_box.move_cursor_left();
                self.mark_dirty();
            }
            InputAction::CursorRight => {
                self.input_box.move_cursor_right();
                self.mark_dirty();
            }
            InputAction::CursorHome => {
                self.input_box.move_cursor_home();
                self.mark_dirty();
            }
            InputAction::CursorEnd => {
                self.input_box.move_cursor_end();
                self.mark_dirty();
            }
            InputAction::ScrollUp => {
                self.answer_scroll.scroll_up(1);
                self.mark_dirty();
            }
            InputAction::ScrollDown => {
                self.answer_scroll.scroll_down(1);
                self.mark_dirty();
            }
            InputAction::PageUp => {
                self.answer_scroll.page_up();
                self.mark_dirty();
            }
            InputAction::PageDown => {
                self.answer_scroll.page_down();
                self.mark_dirty();
            }
            InputAction::ClearQuestion => self.clear_question(),
            InputAction::Submit => {
                let _ = self.submit();
            }
            InputAction::Quit => self.quit(),
        }
    }

    /// Stop the event loop and abort any query still running.
    pub fn quit(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(seq = %in_flight.seq, "aborting query on quit");
            in_flight.handle.abort();
        }
        self.should_quit = true;
    }

    /// Mirror the edit buffer into the question, keeping the cursor where it is.
    fn sync_question(&mut self) {
        let text = self.input_box.get_content().to_string();
        self.state = std::mem::take(&mut self.state).with_question(text);
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::mock::MockResponse;
    use crate::app::test_support::app_with_mock;
    use crate::app::{App, RequestSeq, RequestState, SubmitOutcome, SubmitPolicy};
    use crate::config::ClientConfig;
    use crate::input::InputAction;
    use crate::query::{QueryClient, DEFAULT_ENDPOINT};
    use crate::traits::{Headers, HttpClient, HttpError, Response};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    /// Transport that panics on every request.
    struct PanickingHttpClient;

    #[async_trait]
    impl HttpClient for PanickingHttpClient {
        async fn post(&self, _: &str, _: &str, _: &Headers) -> Result<Response, HttpError> {
            panic!("transport panicked");
        }
    }

    #[tokio::test]
    async fn test_set_question_mirrors_into_input_box() {
        let (mut app, _mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        app.set_question("héllo");

        assert_eq!(app.state().question(), "héllo");
        assert_eq!(app.input_box.get_content(), "héllo");
        assert_eq!(app.input_box.cursor_position(), 5);
    }

    #[tokio::test]
    async fn test_editing_actions_update_question() {
        let (mut app, _mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        for c in "churn".chars() {
            app.apply_action(InputAction::Insert(c));
        }
        app.apply_action(InputAction::CursorHome);
        app.apply_action(InputAction::Delete);
        app.apply_action(InputAction::Paste("C".to_string()));
        assert_eq!(app.state().question(), "Churn");

        app.apply_action(InputAction::CursorEnd);
        app.apply_action(InputAction::Backspace);
        assert_eq!(app.state().question(), "Chur");

        app.apply_action(InputAction::ClearQuestion);
        assert_eq!(app.state().question(), "");
        assert!(app.input_box.is_empty());
        assert_eq!(app.input_box.cursor_position(), 0);
    }

    #[tokio::test]
    async fn test_scroll_actions_stay_within_bounds() {
        let (mut app, _mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        app.apply_action(InputAction::ScrollDown);
        assert_eq!(app.answer_scroll().offset(), 0);

        app.set_answer_bounds(7, 4);
        app.apply_action(InputAction::PageDown);
        app.apply_action(InputAction::ScrollDown);
        assert_eq!(app.answer_scroll().offset(), 5);
        app.apply_action(InputAction::PageDown);
        assert_eq!(app.answer_scroll().offset(), 7);

        app.needs_redraw = false;
        app.apply_action(InputAction::ScrollUp);
        assert_eq!(app.answer_scroll().offset(), 6);
        assert!(app.needs_redraw);
        app.apply_action(InputAction::PageUp);
        app.apply_action(InputAction::PageUp);
        assert_eq!(app.answer_scroll().offset(), 0);
        // Scrolling never touches the question
        assert_eq!(app.state().question(), "");
    }

    #[tokio::test]
    async fn test_submit_sends_question_and_sets_pending() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(MockResponse::json(200, json!({"answer": "A"})));

        app.set_question("Q");
        let outcome = app.submit();

        assert_eq!(outcome, SubmitOutcome::Accepted(RequestSeq::FIRST));
        assert_eq!(app.state().request(), RequestState::Pending);

        let mut rx = app.message_rx.take().unwrap();
        let msg = rx.recv().await.unwrap();
        app.handle_message(msg);

        assert_eq!(app.state().answer(), "A");
        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"question":"Q"}"#));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reject_while_pending() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(
            MockResponse::json(200, json!({"answer": "A"})).delayed(Duration::from_secs(10)),
        );

        assert!(app.submit().is_accepted());
        assert_eq!(app.submit(), SubmitOutcome::Rejected);

        tokio::task::yield_now().await;
        assert_eq!(mock.get_requests().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_supersede_issues_new_seq() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::Supersede);
        mock.set_default_response(
            MockResponse::json(200, json!({"answer": "A"})).delayed(Duration::from_secs(10)),
        );

        let first = app.submit();
        let second = app.submit();

        assert_eq!(first, SubmitOutcome::Accepted(RequestSeq::FIRST));
        assert_eq!(second, SubmitOutcome::Accepted(RequestSeq::FIRST.next()));
        assert!(app.state().is_pending());
    }

    #[tokio::test]
    async fn test_submit_action_and_quit() {
        let (mut app, mock) = app_with_mock(SubmitPolicy::RejectWhilePending);
        mock.set_default_response(
            MockResponse::json(200, json!({"answer": "A"})).delayed(Duration::from_secs(60)),
        );

        app.apply_action(InputAction::Submit);
        assert!(app.state().is_pending());

        app.apply_action(InputAction::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_panicking_transport_settles_as_failed() {
        let client = QueryClient::new(DEFAULT_ENDPOINT, Arc::new(PanickingHttpClient));
        let config = ClientConfig::default().with_log_file(None);
        let mut app = App::new(Arc::new(client), &config);

        app.set_question("Q");
        assert!(app.submit().is_accepted());

        let msg = app.message_rx.as_mut().unwrap().recv().await.unwrap();
        app.handle_message(msg);

        assert_eq!(app.state().request(), RequestState::Failed);
        // Not stuck pending: the next submission is accepted
        assert_eq!(app.submit(), SubmitOutcome::Accepted(RequestSeq::FIRST.next()));
    }
}
