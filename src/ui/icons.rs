// src/ui/icons.rs
//! Icon mappings for entries in the browser.

use crate::fs::FileCategory;

/// Placeholder glyph for the (unwired) download action.
pub const DOWNLOAD_ICON: &str = "\u{f019}";
/// Placeholder glyph for the (unwired) share-link action.
pub const LINK_ICON: &str = "\u{f0c1}";

/// Get the appropriate icon for a file or directory entry.
pub fn icon_for_entry(is_dir: bool, category: FileCategory) -> &'static str {
    if is_dir {
        "\u{f07b}" // folder icon
    } else {
        match category {
            FileCategory::Audio => "\u{f1c7}",
            FileCategory::Video => "\u{f1c8}",
            FileCategory::Archive => "\u{f1c6}",
            FileCategory::Image => "\u{f1c5}",
            FileCategory::Subtitles => "\u{f15c}",
            FileCategory::Document => "\u{f0f6}",
            FileCategory::Other => "\u{f016}",
        }
    }
}
