// src/config/mod.rs
//! Configuration module - command line settings and log setup.

pub mod cli;
pub mod logging;

pub use cli::Config;
pub use logging::init_logging;
