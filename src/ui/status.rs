//! Full-panel status messages: loading, fetch error, and empty lists.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, spinner_frame};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_ON_ACCENT, COLOR_TITLE};

pub fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(COLOR_ACCENT)),
        Span::styled(" Loading...", Style::default().fg(COLOR_TITLE)),
    ]);
    let target = centered_rect(area, area.width, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), target);
}

/// Error message with a retry button below it.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("✗ {}", message),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            " Retry ",
            Style::default()
                .fg(COLOR_ON_ACCENT)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("press r to retry", Style::default().fg(COLOR_DIM))),
    ];

    let target = centered_rect(area, area.width, lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        target,
    );
}

pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let target = centered_rect(area, area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        target,
    );
}
