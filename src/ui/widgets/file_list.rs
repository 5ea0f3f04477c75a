// src/ui/widgets/file_list.rs
//! File browser list widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    api::FileEntry,
    fs::{detect_category, format_size},
    ui::icons::{DOWNLOAD_ICON, LINK_ICON, icon_for_entry},
};

/// Build the row for one entry: icon, name, size (files only), time, actions.
pub fn entry_line(entry: &FileEntry) -> Line<'static> {
    let icon = icon_for_entry(entry.is_dir, detect_category(&entry.name));
    let size = if entry.is_dir {
        String::new()
    } else {
        format_size(entry.size)
    };
    let name_style = if entry.is_dir {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{} ", icon)),
        Span::styled(format!("{:<30}", entry.name), name_style),
        Span::styled(format!("{:>10}", size), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(format!("{:<19}", entry.mod_time), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(DOWNLOAD_ICON, Style::default().fg(Color::Blue)),
        Span::raw(" "),
        Span::raw(LINK_ICON),
    ])
}

/// Render the file browser list.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    entries: &[FileEntry],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = entries.iter().map(|e| ListItem::new(entry_line(e))).collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
