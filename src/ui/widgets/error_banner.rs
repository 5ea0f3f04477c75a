// src/ui/widgets/error_banner.rs
//! Persistent error banner shown above the listing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the error banner.
pub fn render_error_banner(f: &mut Frame<'_>, area: Rect, message: &str) {
    let banner = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::LightRed))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(banner, area);
}
