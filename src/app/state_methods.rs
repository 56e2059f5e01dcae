//! State accessor and utility methods for the App.

use super::{AnswerScroll, App, InteractionState, SubmitPolicy};

impl App {
    /// Current question, answer and request status
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn answer_scroll(&self) -> AnswerScroll {
        self.answer_scroll
    }

    /// Record how far the current answer can scroll in its panel and how
    /// many rows a page holds.
    pub fn set_answer_bounds(&mut self, max: u16, page: u16) {
        self.answer_scroll.set_bounds(max, page);
    }

    /// Flag the screen for redraw on the next loop iteration
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation counter. Only the pending spinner moves, so
    /// the screen is dirtied only while a request is out.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.is_pending() {
            self.mark_dirty();
        }
    }

    /// Whether the submit hint should be drawn as available
    pub fn can_submit(&self) -> bool {
        !(self.state.is_pending() && self.submit_policy == SubmitPolicy::RejectWhilePending)
    }
}
