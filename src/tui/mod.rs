//! TUI presentation layer
//!
//! - `runner`: Entry point and event loop
//! - `actions`: Action dispatch and background fetches
//! - `event`: Terminal event polling
//! - `layout`: Layout calculation
//! - `render`: Frame rendering
//! - `terminal`: Terminal setup/restore
//! - `widgets`: Reusable UI components

pub mod actions;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

pub use runner::run;
