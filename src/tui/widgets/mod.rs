//! Reusable UI components

pub mod comment_form;
pub mod header;
pub mod post_details;
pub mod posts_list;
pub mod status_bar;
pub mod user_selector;

pub use comment_form::CommentForm;
pub use header::Header;
pub use post_details::PostDetails;
pub use posts_list::PostsList;
pub use status_bar::StatusBar;
pub use user_selector::UserSelector;
