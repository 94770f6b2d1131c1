//! Message types for the application (TEA pattern)

use crossterm::event::KeyEvent;

use super::request::RequestId;
use crate::core::{Comment, Post, User};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event for periodic updates (loading animation)
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // User Selector Messages
    // ─────────────────────────────────────────────────────────
    /// Open the user dropdown
    OpenUserMenu,
    /// Close the user dropdown without selecting
    CloseUserMenu,
    /// Move the dropdown cursor up
    UserMenuUp,
    /// Move the dropdown cursor down
    UserMenuDown,
    /// A user was chosen from the dropdown
    SelectUser { user: User },
    /// Users fetch settled successfully
    UsersLoaded { users: Vec<User> },
    /// Users fetch settled with an error
    UsersLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Posts Messages
    // ─────────────────────────────────────────────────────────
    /// Move the posts cursor up
    PostsCursorUp,
    /// Move the posts cursor down
    PostsCursorDown,
    /// Open the highlighted post, or close it if already open
    TogglePost,
    /// Posts fetch settled successfully
    PostsLoaded { req: RequestId, posts: Vec<Post> },
    /// Posts fetch settled with an error
    PostsLoadFailed { req: RequestId, error: String },

    // ─────────────────────────────────────────────────────────
    // Comments Messages
    // ─────────────────────────────────────────────────────────
    /// Move the comment cursor up
    CommentCursorUp,
    /// Move the comment cursor down
    CommentCursorDown,
    /// Comments fetch settled successfully
    CommentsLoaded {
        req: RequestId,
        comments: Vec<Comment>,
    },
    /// Comments fetch settled with an error
    CommentsLoadFailed { req: RequestId, error: String },
    /// Remove the highlighted comment and request its deletion
    DeleteComment,
    /// Background delete settled with an error (removal is not rolled back)
    CommentDeleteFailed {
        post_id: i64,
        comment_id: i64,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Comment Form Messages
    // ─────────────────────────────────────────────────────────
    /// Open the new-comment form
    OpenCommentForm,
    /// Close the new-comment form
    CloseCommentForm,
    /// Validate and submit the form
    SubmitComment,
    /// Reset all form fields and errors
    ClearCommentForm,
    /// Create-comment request settled successfully
    CommentAdded { post_id: i64, comment: Comment },
    /// Create-comment request settled with an error
    CommentAddFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus between the posts list and the comments pane
    FocusNext,
}
