// src/lib.rs
//! fileshare - a terminal browser for fileshare servers.
//!
//! The library holds the listing client, the navigation state machine and
//! the terminal UI; `main` only wires configuration to them.

pub mod api;
pub mod app;
pub mod config;
pub mod fs;
pub mod ui;
