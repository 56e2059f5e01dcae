//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`InteractionState`] - Question, answer and request status
//! - [`SubmitPolicy`] - What happens on submit while a query is pending
//! - [`AppMessage`] - Messages for async communication
//!
//! Queries run on spawned tasks and report back through the message
//! channel; only [`App::handle_message`] applies their results.

mod actions;
mod handlers;
mod messages;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::{
    AnswerScroll, InteractionState, RequestSeq, RequestState, SubmitOutcome, SubmitPolicy,
};

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::ClientConfig;
use crate::query::QueryClient;
use crate::widgets::InputBox;

/// The query task currently allowed to report a result
#[derive(Debug)]
pub(crate) struct InFlight {
    pub(crate) seq: RequestSeq,
    pub(crate) handle: JoinHandle<()>,
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Question, answer and request status
    state: InteractionState,
    /// Edit buffer for the question, mirrored into `state` on every change
    pub input_box: InputBox,
    /// Scroll position in the answer panel
    answer_scroll: AnswerScroll,
    /// Header text
    pub title: String,
    /// Behavior of submit while a request is pending
    pub submit_policy: SubmitPolicy,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever something visible changed
    pub needs_redraw: bool,
    /// Tick counter for the pending spinner
    pub tick_count: u64,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Query client (shared across async tasks)
    pub client: Arc<QueryClient>,
    /// Sequence number of the most recent accepted submission
    latest_seq: Option<RequestSeq>,
    in_flight: Option<InFlight>,
}

impl App {
    /// Create a new App using `client` for queries and the title and submit
    /// policy from `config`.
    pub fn new(client: Arc<QueryClient>, config: &ClientConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            state: InteractionState::new(),
            input_box: InputBox::new(),
            answer_scroll: AnswerScroll::default(),
            title: config.title.clone(),
            submit_policy: config.submit_policy,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            client,
            latest_seq: None,
            in_flight: None,
        }
    }
}
