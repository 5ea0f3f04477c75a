// src/fs/path.rs
//! Syntactic operations on backend paths.
//!
//! Backend paths are `/`-joined segment chains relative to the navigation
//! root, without leading or trailing slash. The root itself is `.`.

/// Sentinel path of the navigation root.
pub const ROOT_PATH: &str = ".";

/// Parent of `path`, or `None` when already at the root.
///
/// Drops the last `/` segment; an empty result falls back to the root.
pub fn parent_path(path: &str) -> Option<String> {
    if path == ROOT_PATH {
        return None;
    }

    let parent = match path.rsplit_once('/') {
        Some((head, _)) => head,
        None => "",
    };

    if parent.is_empty() {
        Some(ROOT_PATH.to_string())
    } else {
        Some(parent.to_string())
    }
}

/// Label shown for `path` in the header.
pub fn display_path(path: &str) -> &str {
    if path == ROOT_PATH { "Root" } else { path }
}
