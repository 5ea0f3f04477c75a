// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedLayout {
    /// Back control, current path and directory size
    pub header: Rect,
    /// Error banner (only while an error is shown)
    pub banner: Option<Rect>,
    /// File list
    pub list: Rect,
    /// Key hints and loading indicator
    pub footer: Rect,
}

/// Compute the layout based on total area and whether a banner is needed.
pub fn compute_layout(area: Rect, show_banner: bool) -> ComputedLayout {
    let mut constraints = vec![Constraint::Length(3)];
    if show_banner {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(1));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if show_banner {
        ComputedLayout {
            header: chunks[0],
            banner: Some(chunks[1]),
            list: chunks[2],
            footer: chunks[3],
        }
    } else {
        ComputedLayout {
            header: chunks[0],
            banner: None,
            list: chunks[1],
            footer: chunks[2],
        }
    }
}
