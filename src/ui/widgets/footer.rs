// src/ui/widgets/footer.rs
//! Key hints and the loading indicator.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const KEY_HINTS: &str = "↑/↓ move  enter open  ← back  r reload  q quit";

/// Render the footer line.
pub fn render_footer(f: &mut Frame<'_>, area: Rect, loading: bool) {
    let mut spans = vec![Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))];
    if loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("loading…", Style::default().fg(Color::Yellow)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
