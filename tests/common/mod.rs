//! Common test utilities for integration tests.
//!
//! ```ignore
//! let (mut app, mock) = TestAppBuilder::new()
//!     .with_mock(MockHttpConfig::new().with_answer("A"))
//!     .build();
//! app.set_question("Q");
//! app.submit();
//! settle(&mut app).await;
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use ask_tui::app::{App, SubmitPolicy};
use ask_tui::config::ClientConfig;
use ask_tui::query::QueryClient;
use ratatui::{backend::TestBackend, Terminal};

/// Endpoint the test client posts to
pub const ENDPOINT: &str = "http://localhost:8000/api/ask";

/// Builder for App instances backed by a mock transport.
pub struct TestAppBuilder {
    policy: SubmitPolicy,
    mock: MockHttpConfig,
}

#[allow(dead_code)]
impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            policy: SubmitPolicy::RejectWhilePending,
            mock: MockHttpConfig::new(),
        }
    }

    pub fn with_policy(mut self, policy: SubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_mock(mut self, mock: MockHttpConfig) -> Self {
        self.mock = mock;
        self
    }

    /// Build the App and hand back the mock for request assertions.
    pub fn build(self) -> (App, MockHttpClient) {
        let mock = self.mock.build();
        let client = QueryClient::new(ENDPOINT, Arc::new(mock.clone()));
        let config = ClientConfig::default()
            .with_endpoint(ENDPOINT)
            .with_submit_policy(self.policy)
            .with_log_file(None);
        (App::new(Arc::new(client), &config), mock)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for the next completion message and apply it.
#[allow(dead_code)]
pub async fn settle(app: &mut App) {
    let msg = app
        .message_rx
        .as_mut()
        .expect("message receiver already taken")
        .recv()
        .await
        .expect("message channel closed");
    app.handle_message(msg);
}

/// Render `app` into a TestBackend and return the screen as text, one line
/// per row.
#[allow(dead_code)]
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ask_tui::ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
