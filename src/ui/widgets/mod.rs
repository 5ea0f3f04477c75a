// src/ui/widgets/mod.rs
//! Custom widgets for the fileshare UI.

pub mod error_banner;
pub mod file_list;
pub mod footer;
pub mod header;

// Re-export widget rendering functions
pub use error_banner::render_error_banner;
pub use file_list::render_file_list;
pub use footer::render_footer;
pub use header::render_header;
