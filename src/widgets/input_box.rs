use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::{COLOR_INPUT_BORDER, COLOR_INPUT_TEXT};

/// A single-line text input with cursor handling and horizontal scrolling.
///
/// Positions are counted in chars, never bytes, so non-ASCII text edits
/// cleanly. Rendering accounts for wide glyphs.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Cursor position as a char index into `content`
    cursor_position: usize,
}

impl InputBox {
    /// Create a new empty InputBox
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert a string at the cursor
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert_str(at, s);
        self.cursor_position += s.chars().count();
    }

    /// Delete the character under the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Cursor position in chars
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the content and put the cursor at the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor_position = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// First visible char so that the cursor cell fits in `width` columns.
    fn scroll_offset(&self, chars: &[char], width: usize) -> usize {
        let mut offset = 0;
        while offset < self.cursor_position
            && columns(&chars[offset..self.cursor_position]) >= width
        {
            offset += 1;
        }
        offset
    }

    /// Column of the cursor relative to the start of a text area `width`
    /// cells wide, after horizontal scrolling.
    pub fn cursor_column(&self, width: u16) -> u16 {
        let chars: Vec<char> = self.content.chars().collect();
        let offset = self.scroll_offset(&chars, width as usize);
        columns(&chars[offset..self.cursor_position]) as u16
    }

    /// Render the input box inside a bordered block with `title`.
    ///
    /// The terminal cursor is not drawn here; callers place it at
    /// [`InputBox::cursor_column`] inside the block.
    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_INPUT_BORDER))
            .title(title)
            .render(area, buf);

        if area.width <= 2 || area.height <= 2 {
            return;
        }
        let inner_x = area.x + 1;
        let inner_y = area.y + 1;
        let width = (area.width - 2) as usize;

        let chars: Vec<char> = self.content.chars().collect();
        let offset = self.scroll_offset(&chars, width);
        let style = Style::default().fg(COLOR_INPUT_TEXT);

        let mut col = 0usize;
        for c in &chars[offset..] {
            let w = c.width().unwrap_or(0);
            if col + w > width {
                break;
            }
            buf.set_string(inner_x + col as u16, inner_y, c.to_string(), style);
            col += w;
        }
    }
}

/// Display width of a run of chars
fn columns(chars: &[char]) -> usize {
    chars.iter().map(|c| c.width().unwrap_or(0)).sum()
}

/// A renderable wrapper for InputBox that implements the Widget trait
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str) -> Self {
        Self { input_box, title }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box.render_with_title(area, buf, self.title);
    }
}
