//! Type definitions for the application state.
//!
//! - [`RequestState`] - Lifecycle of the current submission
//! - [`InteractionState`] - Question, answer and request status as one value
//! - [`RequestSeq`] - Tag carried by each accepted submission
//! - [`SubmitPolicy`] / [`SubmitOutcome`] - What `submit` does while pending
//! - [`AnswerScroll`] - Vertical position in a long answer

use std::fmt;

use crate::models::Answer;

/// Lifecycle status of the current or most recent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Everything the screen shows, held as one value.
///
/// Transitions consume the old value and return the new one, so a
/// half-applied update cannot be observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    question: String,
    answer: Answer,
    request: RequestState,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    pub fn request(&self) -> RequestState {
        self.request
    }

    pub fn is_pending(&self) -> bool {
        self.request == RequestState::Pending
    }

    /// Replace the question. Request status and answer are untouched.
    pub fn with_question(self, question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..self
        }
    }

    /// A submission was issued. The previous answer stays on screen.
    pub fn pending(self) -> Self {
        Self {
            request: RequestState::Pending,
            ..self
        }
    }

    pub fn succeeded(self, answer: Answer) -> Self {
        Self {
            answer,
            request: RequestState::Succeeded,
            ..self
        }
    }

    /// The answer is left as it was.
    pub fn failed(self) -> Self {
        Self {
            request: RequestState::Failed,
            ..self
        }
    }
}

/// Sequence number of an accepted submission. The first one is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub const FIRST: RequestSeq = RequestSeq(1);

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        RequestSeq(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What `submit` does when a request is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Refuse the new submission
    #[default]
    RejectWhilePending,
    /// Abort the pending request and issue a new one
    Supersede,
}

/// Result of calling `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(RequestSeq),
    Rejected,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Vertical scroll position of the answer panel.
///
/// `max` and `page` come from the last layout; the offset never exceeds
/// `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerScroll {
    offset: u16,
    max: u16,
    page: u16,
}

impl AnswerScroll {
    /// First answer row shown
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Largest offset that still fills the panel
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Whether the answer is taller than its panel
    pub fn can_scroll(&self) -> bool {
        self.max > 0
    }

    /// Apply new bounds, pulling the offset back inside them.
    pub fn set_bounds(&mut self, max: u16, page: u16) {
        self.max = max;
        self.page = page.max(1);
        self.offset = self.offset.min(max);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page);
    }

    /// Back to the top. Bounds are kept until the next layout.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
