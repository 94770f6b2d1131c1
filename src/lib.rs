//! Postdeck Library
//!
//! A TUI client for browsing users, their posts, and post comments
//! served by a REST-like resource API.

// Module declarations
pub mod api;
pub mod app;
pub mod common;
pub mod config;
pub mod core;
pub mod tui;

// Re-export main entry point
pub use app::run;
