//! Core domain types

mod remote;
mod types;

pub use remote::RemoteData;
pub use types::{Comment, NewComment, Post, User};
