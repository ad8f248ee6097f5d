//! Color theme constants for the posts screen.

use ratatui::style::Color;

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent for the view toggle button and selection
pub const COLOR_ACCENT: Color = Color::Rgb(0, 123, 255); // blue #007BFF

/// Text drawn on top of the accent color
pub const COLOR_ON_ACCENT: Color = Color::White;

/// Post titles
pub const COLOR_TITLE: Color = Color::White;

/// Post bodies and secondary text
pub const COLOR_DIM: Color = Color::Gray;

/// Filled star for favorites
pub const COLOR_FAVORITE: Color = Color::Rgb(255, 68, 68); // red #FF4444

/// Error message text
pub const COLOR_ERROR: Color = Color::Red;

/// Background of the selected row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 34, 48);
