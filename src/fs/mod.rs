// src/fs/mod.rs
//! Pure helpers over backend paths, byte sizes and file names.

pub mod detection;
pub mod path;
pub mod size;

// Re-export commonly used types
pub use detection::{FileCategory, detect_category};
pub use path::{ROOT_PATH, display_path, parent_path};
pub use size::{format_size, total_size, total_size_gb};
