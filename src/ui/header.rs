//! Header bar with the view title and the toggle button.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ON_ACCENT, COLOR_TITLE};
use super::toggle_button_label;
use crate::state::ViewState;

pub fn render_header(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = format!(" {} ", toggle_button_label(state.show_favorites));
    let [title_area, button_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(button.width() as u16),
    ])
    .areas(inner);

    let (title, count) = if state.show_favorites {
        ("Favorites", state.favorites.len())
    } else {
        ("All Posts", state.posts.len())
    };
    let title_line = Line::from(vec![
        Span::styled(
            format!(" {}", title),
            Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", count), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(title_line), title_area);

    let button_style = Style::default()
        .fg(COLOR_ON_ACCENT)
        .bg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Span::styled(button, button_style)).alignment(Alignment::Right),
        button_area,
    );
}
