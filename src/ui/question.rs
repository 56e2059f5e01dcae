//! Question box and the hint line under it.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM};
use crate::app::App;
use crate::widgets::InputBoxWidget;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame
const TICKS_PER_FRAME: u64 = 8;

pub const QUESTION_TITLE: &str = "Question:";

pub fn spinner_frame(tick_count: u64) -> char {
    SPINNER_FRAMES[((tick_count / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Render the bordered input and place the terminal cursor in it.
pub fn render_question(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(InputBoxWidget::new(&app.input_box, QUESTION_TITLE), area);

    if area.width > 2 && area.height > 2 {
        let column = app.input_box.cursor_column(area.width - 2);
        frame.set_cursor_position(Position::new(area.x + 1 + column, area.y + 1));
    }
}

/// Build the key hints. The scroll keys show only when the answer overflows
/// its panel; the spinner is appended while pending.
pub fn build_hints(app: &App) -> Line<'static> {
    let key = Style::default().fg(COLOR_ACCENT);
    let label = Style::default();
    let (ask_key, ask_label) = if app.can_submit() {
        (key, label)
    } else {
        let disabled = Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM);
        (disabled, disabled)
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("[Enter]", ask_key),
        Span::styled(" Ask  ", ask_label),
        Span::styled("[Esc]", key),
        Span::styled(" Clear  ", label),
        Span::styled("[Ctrl+C]", key),
        Span::styled(" Quit", label),
    ];

    if app.answer_scroll().can_scroll() {
        spans.push(Span::styled("  [↑↓/PgUp/PgDn]", key));
        spans.push(Span::styled(" Scroll", label));
    }

    if app.state().is_pending() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} Asking...", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_ACTIVE),
        ));
    }

    Line::from(spans)
}

pub fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Paragraph::new(build_hints(app)), area);
}
