//! Color theme constants.

use ratatui::style::Color;

/// Header underline
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the question box
pub const COLOR_INPUT_BORDER: Color = Color::Cyan;

/// Text typed into the question box
pub const COLOR_INPUT_TEXT: Color = Color::White;

/// Key names in the hint line
pub const COLOR_ACCENT: Color = Color::White;

/// Title bar text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info and disabled hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Spinner while a query is pending
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Border of the answer panel
pub const COLOR_ANSWER_BORDER: Color = Color::Rgb(4, 181, 117); // green #04B575
