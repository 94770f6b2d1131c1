//! Remote resource API access
//!
//! - `client`: HTTP wrapper over the configured base URL
//! - `resources`: typed accessors for users, posts, and comments

mod client;
mod resources;

pub use client::ApiClient;
