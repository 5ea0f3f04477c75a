// src/ui/widgets/header.rs
//! Header bar: Back control, current path and aggregate size.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::fs::display_path;

/// Render the header bar.
pub fn render_header(
    f: &mut Frame<'_>,
    area: Rect,
    current_path: &str,
    can_go_up: bool,
    total_gb: f64,
) {
    let block = Block::default().borders(Borders::ALL).title(" fileshare ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let back_style = if can_go_up {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let left = Line::from(vec![
        Span::styled("[← Back]", back_style),
        Span::raw("  "),
        Span::styled(display_path(current_path).to_string(), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(left), halves[0]);

    let size = Line::from(Span::styled(
        format!("Directory Size: {} GB", total_gb),
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(Paragraph::new(size).alignment(Alignment::Right), halves[1]);
}
