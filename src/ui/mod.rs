//! UI rendering for the posts screen.
//!
//! Layout, top to bottom:
//! - Header with the view title and the view toggle button
//! - Body: the post list, or a loading / error / empty status panel
//! - Footer with keybind hints for the current screen

mod header;
mod helpers;
mod post_list;
mod status;
mod theme;

pub use helpers::{
    spinner_frame, truncate_to_width, FAVORITE_MARKER, NOT_FAVORITE_MARKER, SPINNER_FRAMES,
};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FAVORITE};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::hints_for;
use crate::state::Screen;

/// Label of the button that switches view modes.
pub fn toggle_button_label(show_favorites: bool) -> &'static str {
    if show_favorites {
        "View All"
    } else {
        "View Favorites"
    }
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the app's current state.
///
/// Takes `&mut App` so the list can update its scroll offset and the page
/// size used by PageUp/PageDown.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let screen = app.screen();
    match screen {
        Screen::Loading => status::render_loading(frame, body_area, app.tick_count),
        Screen::Error => {
            let message = app.state().error.clone().unwrap_or_default();
            status::render_error(frame, body_area, &message);
        }
        Screen::AllPosts | Screen::Favorites => {
            let [header_area, list_area] =
                Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(body_area);
            header::render_header(frame, header_area, app.state());
            post_list::render_post_list(frame, list_area, app);
        }
    }

    render_footer(frame, footer_area, screen);
}

fn render_footer(frame: &mut Frame, area: Rect, screen: Screen) {
    let key_style = Style::default()
        .fg(theme::COLOR_TITLE)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme::COLOR_DIM);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints_for(screen).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
