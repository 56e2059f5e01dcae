//! UI rendering.
//!
//! Top to bottom:
//! - Header with the configured title
//! - Question box
//! - Key hints, with a spinner while a query is pending
//! - Answer panel, present only when there is an answer
//!
//! Rendering reads `&App` and never mutates it. The answer's scroll bounds
//! depend on the screen size, so the event loop refreshes them with
//! [`sync_answer_scroll`] before each draw.

mod answer;
mod question;
mod theme;

pub use answer::{answer_max_scroll, ANSWER_TITLE};
pub use question::{build_hints, spinner_frame, QUESTION_TITLE};
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_ANSWER_BORDER, COLOR_BORDER, COLOR_DIM, COLOR_HEADER,
    COLOR_INPUT_BORDER, COLOR_INPUT_TEXT,
};

use std::rc::Rc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Header, question, hints, answer
fn screen_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area)
}

/// Fit the answer's scroll bounds to a screen of size `area`.
pub fn sync_answer_scroll(app: &mut App, area: Rect) {
    let viewport = answer::answer_viewport(screen_layout(area)[3]);
    let max = answer_max_scroll(app.state().answer(), viewport);
    app.set_answer_bounds(max, viewport.height);
}

/// Render the whole screen for the current state
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    render_header(frame, chunks[0], app);
    question::render_question(frame, chunks[1], app);
    question::render_hints(frame, chunks[2], app);

    let answer = app.state().answer();
    if !answer.is_empty() {
        answer::render_answer(frame, chunks[3], answer, app.answer_scroll().offset());
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::styled(
        format!(" {}", app.title),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}
