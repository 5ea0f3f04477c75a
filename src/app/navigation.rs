// src/app/navigation.rs
//! Navigation state of the directory view and its transitions.

use crate::{
    api::{FileEntry, ListingError},
    fs::{ROOT_PATH, parent_path},
};

/// Prefix of every message shown in the error banner.
pub const ERROR_PREFIX: &str = "Error fetching files: ";

/// The two states of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// Showing the last successful listing.
    Idle,
    /// Showing the last successful listing plus an error banner.
    Error,
}

/// What the view is showing and where it is.
///
/// `files` always holds the most recent successful listing. A failed fetch
/// only sets `error`; it never touches `files` or `current_path`.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    current_path: String,
    files: Vec<FileEntry>,
    error: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Empty listing at the root.
    pub fn new() -> Self {
        Self {
            current_path: ROOT_PATH.to_string(),
            files: Vec::new(),
            error: None,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> ViewStatus {
        if self.error.is_some() {
            ViewStatus::Error
        } else {
            ViewStatus::Idle
        }
    }

    /// Whether the Back control is enabled.
    pub fn can_go_up(&self) -> bool {
        self.current_path != ROOT_PATH
    }

    /// Target of a Back action, `None` at the root.
    pub fn parent(&self) -> Option<String> {
        parent_path(&self.current_path)
    }

    /// Apply the outcome of a listing request for `path`.
    pub fn apply(
        &mut self,
        path: String,
        result: Result<Vec<FileEntry>, ListingError>,
    ) -> ViewStatus {
        match result {
            Ok(files) => {
                self.files = files;
                self.current_path = path;
                self.error = None;
            }
            Err(error) => {
                self.error = Some(format!("{ERROR_PREFIX}{error}"));
            }
        }
        self.status()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    fn entry(name: &str, is_dir: bool) -> FileEntry {
        FileEntry {
            name: name.into(),
            size: 10,
            is_dir,
            mod_time: "2024-01-01".into(),
            path: name.into(),
        }
    }

    fn server_error() -> ListingError {
        ListingError::Status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[test]
    fn starts_idle_and_empty_at_root() {
        let state = NavigationState::new();

        assert_eq!(state.current_path(), ".");
        assert!(state.files().is_empty());
        assert_eq!(state.status(), ViewStatus::Idle);
        assert!(!state.can_go_up());
    }

    #[test]
    fn success_replaces_listing_in_order() {
        let mut state = NavigationState::new();
        state.apply(".".into(), Ok(vec![entry("old", false)]));

        let listing = vec![entry("z", false), entry("a", true), entry("m", false)];
        let status = state.apply("docs".into(), Ok(listing.clone()));

        assert_eq!(status, ViewStatus::Idle);
        assert_eq!(state.files(), listing.as_slice());
        assert_eq!(state.current_path(), "docs");
        assert!(state.can_go_up());
    }

    #[test]
    fn failure_keeps_listing_and_path() {
        let mut state = NavigationState::new();
        state.apply("docs".into(), Ok(vec![entry("a.txt", false)]));
        let before = state.files().to_vec();

        let status = state.apply("docs/missing".into(), Err(server_error()));

        assert_eq!(status, ViewStatus::Error);
        assert_eq!(state.error(), Some("Error fetching files: Failed to fetch files"));
        assert_eq!(state.files(), before.as_slice());
        assert_eq!(state.current_path(), "docs");
    }

    #[test]
    fn success_after_failure_clears_error() {
        let mut state = NavigationState::new();
        state.apply("docs".into(), Err(server_error()));

        state.apply("docs".into(), Ok(Vec::new()));

        assert_eq!(state.error(), None);
        assert_eq!(state.status(), ViewStatus::Idle);
    }

    #[test]
    fn parent_follows_current_path() {
        let mut state = NavigationState::new();
        assert_eq!(state.parent(), None);

        state.apply("a/b/c".into(), Ok(Vec::new()));

        assert_eq!(state.parent().as_deref(), Some("a/b"));
    }
}
