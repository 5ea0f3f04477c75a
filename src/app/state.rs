// src/app/state.rs
//! Application state management.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{Frame, widgets::ListState};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info, warn};

use crate::{
    api::{FileEntry, ListingClient, ListingError},
    app::navigation::{NavigationState, ViewStatus},
    fs::{ROOT_PATH, total_size_gb},
    ui::{
        keybindings::{NavigationAction, key_to_action},
        layout::compute_layout,
        widgets::{render_error_banner, render_file_list, render_footer, render_header},
    },
};

/// Completion of one listing request, posted back to the UI loop.
#[derive(Debug)]
pub struct ListingEvent {
    /// Sequence number of the request
    pub token: u64,
    /// Path that was requested
    pub path: String,
    pub result: Result<Vec<FileEntry>, ListingError>,
}

/// Main application state.
pub struct App {
    /// What is on screen and where we are
    pub navigation: NavigationState,
    /// List widget state
    pub state: ListState,
    /// Currently selected index
    pub selected: usize,

    client: Arc<dyn ListingClient>,
    /// Token of the most recently issued request
    latest_token: u64,
    /// True until the most recent request completes
    loading: bool,

    /// Listing channel sender (request tasks -> UI)
    listing_tx: UnboundedSender<ListingEvent>,
    /// Listing channel receiver
    listing_rx: UnboundedReceiver<ListingEvent>,
}

impl App {
    /// Create a new application instance. Nothing is fetched until `start`.
    pub fn new(client: Arc<dyn ListingClient>) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        let (listing_tx, listing_rx) = unbounded_channel();

        Self {
            navigation: NavigationState::new(),
            state,
            selected: 0,
            client,
            latest_token: 0,
            loading: false,
            listing_tx,
            listing_rx,
        }
    }

    /// Issue the initial listing request for the root.
    pub fn start(&mut self) {
        self.load_directory(ROOT_PATH.to_string());
    }

    /// Whether a request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Request the listing for `path` in the background.
    ///
    /// The result arrives through `next_listing` and must be handed to
    /// `apply_listing`. Returns the token of the request.
    pub fn load_directory(&mut self, path: String) -> u64 {
        self.latest_token += 1;
        self.loading = true;
        let token = self.latest_token;
        info!(%path, token, "loading directory");

        let client = Arc::clone(&self.client);
        let tx = self.listing_tx.clone();
        tokio::spawn(async move {
            let result = client.list_directory(&path).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(ListingEvent {
                token,
                path,
                result,
            });
        });

        token
    }

    /// Descend into `entry` if it is a directory. Files are not openable.
    pub fn navigate_into(&mut self, entry: &FileEntry) -> Option<u64> {
        if entry.is_dir {
            Some(self.load_directory(entry.path.clone()))
        } else {
            None
        }
    }

    /// Descend into the selected entry.
    pub fn navigate_into_selected(&mut self) -> Option<u64> {
        let entry = self.selected_entry()?.clone();
        self.navigate_into(&entry)
    }

    /// Go to the parent directory. No-op at the root.
    pub fn navigate_up(&mut self) -> Option<u64> {
        let parent = self.navigation.parent()?;
        Some(self.load_directory(parent))
    }

    /// Fetch the current directory again.
    pub fn reload(&mut self) -> u64 {
        let path = self.navigation.current_path().to_string();
        self.load_directory(path)
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.navigation.files().get(self.selected)
    }

    /// Wait for the next completed listing request.
    pub async fn next_listing(&mut self) -> Option<ListingEvent> {
        self.listing_rx.recv().await
    }

    /// Apply a completed request. Returns false when it was superseded by a
    /// newer request and discarded.
    pub fn apply_listing(&mut self, event: ListingEvent) -> bool {
        if event.token != self.latest_token {
            debug!(
                path = %event.path,
                token = event.token,
                latest = self.latest_token,
                "discarding stale listing"
            );
            return false;
        }
        self.loading = false;

        let path = event.path.clone();
        match self.navigation.apply(event.path, event.result) {
            ViewStatus::Idle => {
                info!(%path, entries = self.navigation.files().len(), "directory loaded");
                self.selected = 0;
            }
            ViewStatus::Error => {
                warn!(%path, error = self.navigation.error(), "listing failed");
            }
        }

        self.state.select(Some(self.selected));
        true
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            NavigationAction::Down => {
                if self.selected + 1 < self.navigation.files().len() {
                    self.selected += 1;
                }
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            NavigationAction::Enter => {
                self.navigate_into_selected();
            }
            NavigationAction::Back => {
                self.navigate_up();
            }
            NavigationAction::Reload => {
                self.reload();
            }
            NavigationAction::Quit => {
                return true; // Signal to quit
            }
            NavigationAction::None => {}
        }

        self.state.select(Some(self.selected));
        false
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let error = self.navigation.error().map(str::to_string);
        let layout = compute_layout(f.area(), error.is_some());

        render_header(
            f,
            layout.header,
            self.navigation.current_path(),
            self.navigation.can_go_up(),
            total_size_gb(self.navigation.files()),
        );

        if let (Some(area), Some(message)) = (layout.banner, error.as_deref()) {
            render_error_banner(f, area, message);
        }

        render_file_list(f, layout.list, self.navigation.files(), &mut self.state);
        render_footer(f, layout.footer, self.loading);
    }
}
