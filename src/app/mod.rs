// src/app/mod.rs
//! Application module - navigation state and the controller driving it.

pub mod navigation;
pub mod state;

// Re-export the App struct
pub use navigation::{ERROR_PREFIX, NavigationState, ViewStatus};
pub use state::{App, ListingEvent};
