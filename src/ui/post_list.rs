//! Scrollable list of posts.
//!
//! Each post takes three rows: marker and title, a one-line body preview,
//! and a spacer. The selected post shows its full body, word-wrapped, in
//! place of the preview.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use super::helpers::{truncate_to_width, wrap_to_width, FAVORITE_MARKER, NOT_FAVORITE_MARKER};
use super::status::render_empty;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FAVORITE, COLOR_SELECTED_BG, COLOR_TITLE};
use crate::app::App;
use crate::models::Post;
use crate::state::ViewState;

/// Rows per collapsed list item.
pub const ITEM_HEIGHT: u16 = 3;

const HIGHLIGHT_SYMBOL: &str = "▌ ";

pub fn render_post_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);

    app.page_size = usize::from((inner.height / ITEM_HEIGHT).max(1));

    if app.visible_posts().is_empty() {
        frame.render_widget(block, area);
        let message = if app.state().show_favorites {
            "No favorite posts yet."
        } else {
            "No posts to show."
        };
        render_empty(frame, inner, message);
        return;
    }

    // Room left after the highlight gutter
    let text_width = usize::from(inner.width).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
    let selected = app.selected_index();
    let items: Vec<ListItem> = app
        .visible_posts()
        .iter()
        .enumerate()
        .map(|(i, post)| post_item(post, app.state(), text_width, selected == Some(i)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn post_item<'a>(post: &Post, state: &ViewState, width: usize, expanded: bool) -> ListItem<'a> {
    let (marker, marker_style) = if state.is_favorite(post.id) {
        (FAVORITE_MARKER, Style::default().fg(COLOR_FAVORITE))
    } else {
        (NOT_FAVORITE_MARKER, Style::default().fg(COLOR_DIM))
    };

    // Marker and its trailing space take two columns
    let title_width = width.saturating_sub(2);
    let title = Line::from(vec![
        Span::styled(marker, marker_style),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&post.title, title_width),
            Style::default().fg(COLOR_TITLE).add_modifier(Modifier::BOLD),
        ),
    ]);
    let body_style = Style::default().fg(COLOR_DIM);

    let mut lines = vec![title];
    if expanded {
        lines.extend(
            wrap_to_width(&post.body, title_width)
                .into_iter()
                .map(|row| Line::from(Span::styled(format!("  {row}"), body_style))),
        );
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_to_width(&post.body_preview(), title_width)),
            body_style,
        )));
    }
    lines.push(Line::default());

    ListItem::new(lines)
}
