//! Answer panel.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::COLOR_ANSWER_BORDER;

pub const ANSWER_TITLE: &str = "Answer:";

fn answer_text(answer: &str) -> Paragraph<'_> {
    Paragraph::new(answer).wrap(Wrap { trim: false })
}

fn answer_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_ANSWER_BORDER))
        .title(ANSWER_TITLE)
}

/// Inner area of a panel drawn at `panel`
pub fn answer_viewport(panel: Rect) -> Rect {
    answer_block().inner(panel)
}

/// How many rows `answer` can scroll inside `viewport` before its last
/// wrapped line reaches the bottom edge.
pub fn answer_max_scroll(answer: &str, viewport: Rect) -> u16 {
    if viewport.width == 0 || answer.is_empty() {
        return 0;
    }
    let rows = answer_text(answer).line_count(viewport.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(viewport.height)
}

/// Draw `answer` wrapped inside a bordered panel, starting `scroll` rows
/// down. Callers skip this when there is no answer.
pub fn render_answer(frame: &mut Frame, area: Rect, answer: &str, scroll: u16) {
    let paragraph = answer_text(answer)
        .block(answer_block())
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
