//! Application state (Model in TEA pattern)

use crate::core::{Comment, Post, RemoteData, User};

use super::form::CommentFormState;
use super::request::{RequestId, RequestSeq};

/// Which region keyboard input is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Posts list (default)
    #[default]
    Posts,
    /// Comments pane of the open post
    Comments,
    /// New-comment form
    Form,
}

/// Open/closed disclosure state of the user dropdown
#[derive(Debug, Default)]
pub struct UserMenuState {
    pub open: bool,
    pub cursor: usize,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    /// Host shown in the header bar
    pub api_host: String,

    /// The full user collection, fetched once at startup
    pub users: RemoteData<Vec<User>>,

    /// Currently selected user, if any
    pub selected_user: Option<User>,

    /// Posts of the selected user
    pub posts: RemoteData<Vec<Post>>,

    /// Currently opened post; always belongs to `selected_user`
    pub selected_post: Option<Post>,

    /// Comments of the opened post
    pub comments: RemoteData<Vec<Comment>>,

    /// New-comment form
    pub form: CommentFormState,

    /// User dropdown disclosure state
    pub user_menu: UserMenuState,

    /// Highlighted row in the posts list
    pub posts_cursor: usize,

    /// Highlighted comment in the detail pane
    pub comment_cursor: usize,

    /// Keyboard focus
    pub focus: Focus,

    /// Request generation for the posts region
    pub posts_req: RequestSeq,

    /// Request generation for the comments region
    pub comments_req: RequestSeq,

    /// Frame counter for the loading animation
    pub animation_frame: u64,

    quitting: bool,
}

impl AppState {
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            ..Self::default()
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    /// Advance animation frame (call on each tick)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Calculate indeterminate progress ratio (0.0 to 1.0).
    /// Creates a bouncing effect from left to right and back.
    pub fn indeterminate_ratio(&self) -> f64 {
        let cycle_length = 300;
        let position = self.animation_frame % cycle_length;

        let half = cycle_length / 2;
        if position < half {
            position as f64 / half as f64
        } else {
            (cycle_length - position) as f64 / half as f64
        }
    }

    // ─────────────────────────────────────────────────────────
    // Selection transitions
    // ─────────────────────────────────────────────────────────

    /// Begin a user selection change.
    ///
    /// Clears everything dependent on the previous selection before the new
    /// fetch settles: post list, post selection, comments, form. Returns the
    /// request id the posts fetch must carry.
    pub fn begin_user_selection(&mut self, user: User) -> RequestId {
        self.selected_user = Some(user);
        self.posts = RemoteData::Loading;
        self.selected_post = None;
        self.comments.invalidate();
        self.comments_req.supersede();
        self.form.close();
        self.posts_cursor = 0;
        self.comment_cursor = 0;
        self.focus = Focus::Posts;
        self.posts_req.issue()
    }

    /// Begin a post selection change. Returns the comments fetch id.
    pub fn begin_post_selection(&mut self, post: Post) -> RequestId {
        self.selected_post = Some(post);
        self.comments = RemoteData::Loading;
        self.comment_cursor = 0;
        self.form.close();
        self.comments_req.issue()
    }

    /// Close the open post (toggle off).
    pub fn deselect_post(&mut self) {
        self.selected_post = None;
        self.comments.invalidate();
        self.comments_req.supersede();
        self.form.close();
        self.comment_cursor = 0;
        self.focus = Focus::Posts;
    }

    // ─────────────────────────────────────────────────────────
    // Cursor helpers
    // ─────────────────────────────────────────────────────────

    /// Post under the cursor in the posts list
    pub fn highlighted_post(&self) -> Option<&Post> {
        self.posts.value()?.get(self.posts_cursor)
    }

    /// Comment under the cursor in the detail pane
    pub fn highlighted_comment(&self) -> Option<&Comment> {
        self.comments.value()?.get(self.comment_cursor)
    }

    pub fn posts_cursor_up(&mut self) {
        self.posts_cursor = self.posts_cursor.saturating_sub(1);
    }

    pub fn posts_cursor_down(&mut self) {
        let len = self.posts.value().map_or(0, Vec::len);
        if self.posts_cursor + 1 < len {
            self.posts_cursor += 1;
        }
    }

    pub fn comment_cursor_up(&mut self) {
        self.comment_cursor = self.comment_cursor.saturating_sub(1);
    }

    pub fn comment_cursor_down(&mut self) {
        let len = self.comments.value().map_or(0, Vec::len);
        if self.comment_cursor + 1 < len {
            self.comment_cursor += 1;
        }
    }

    /// Keep the comment cursor on a valid row after a removal
    pub fn clamp_comment_cursor(&mut self) {
        let len = self.comments.value().map_or(0, Vec::len);
        if len == 0 {
            self.comment_cursor = 0;
        } else if self.comment_cursor >= len {
            self.comment_cursor = len - 1;
        }
    }
}
