//! Update function - handles state transitions (TEA pattern)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::common::prelude::*;
use crate::core::{NewComment, RemoteData};

use super::message::Message;
use super::request::RequestId;
use super::state::{AppState, Focus};

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background request
    Fetch(FetchTask),
}

/// Background requests to spawn
#[derive(Debug, Clone)]
pub enum FetchTask {
    /// Fetch the full user collection
    Users,
    /// Fetch the posts of one user
    Posts { user_id: i64, req: RequestId },
    /// Fetch the comments of one post
    Comments { post_id: i64, req: RequestId },
    /// Create a comment
    AddComment { payload: NewComment },
    /// Delete a comment (fire-and-forget; removal already applied)
    DeleteComment { post_id: i64, comment_id: i64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    fn fetch(task: FetchTask) -> Self {
        Self::action(UpdateAction::Fetch(task))
    }
}

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // User Selector
        // ─────────────────────────────────────────────────────────
        Message::OpenUserMenu => {
            if let Some(users) = state.users.value() {
                if !users.is_empty() {
                    state.user_menu.open = true;
                    // Start on the current selection when there is one
                    state.user_menu.cursor = state
                        .selected_user
                        .as_ref()
                        .and_then(|sel| users.iter().position(|u| u.id == sel.id))
                        .unwrap_or(0);
                }
            }
            UpdateResult::none()
        }

        Message::CloseUserMenu => {
            state.user_menu.open = false;
            UpdateResult::none()
        }

        Message::UserMenuUp => {
            state.user_menu.cursor = state.user_menu.cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::UserMenuDown => {
            let len = state.users.value().map_or(0, Vec::len);
            if state.user_menu.cursor + 1 < len {
                state.user_menu.cursor += 1;
            }
            UpdateResult::none()
        }

        Message::SelectUser { user } => {
            state.user_menu.open = false;
            let user_id = user.id;
            let req = state.begin_user_selection(user);
            UpdateResult::fetch(FetchTask::Posts { user_id, req })
        }

        Message::UsersLoaded { users } => {
            info!("Loaded {} users", users.len());
            state.users = RemoteData::Loaded(users);
            UpdateResult::none()
        }

        Message::UsersLoadFailed { error } => {
            state.users = RemoteData::Failed(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Posts
        // ─────────────────────────────────────────────────────────
        Message::PostsCursorUp => {
            state.posts_cursor_up();
            UpdateResult::none()
        }

        Message::PostsCursorDown => {
            state.posts_cursor_down();
            UpdateResult::none()
        }

        Message::TogglePost => {
            let Some(post) = state.highlighted_post().cloned() else {
                return UpdateResult::none();
            };

            if state.selected_post.as_ref().map(|p| p.id) == Some(post.id) {
                state.deselect_post();
                UpdateResult::none()
            } else {
                let post_id = post.id;
                let req = state.begin_post_selection(post);
                UpdateResult::fetch(FetchTask::Comments { post_id, req })
            }
        }

        Message::PostsLoaded { req, posts } => {
            if !state.posts_req.is_current(req) {
                debug!("Dropping stale posts settle ({req:?})");
                return UpdateResult::none();
            }
            state.posts = RemoteData::Loaded(posts);
            state.posts_cursor = 0;
            UpdateResult::none()
        }

        Message::PostsLoadFailed { req, error } => {
            if !state.posts_req.is_current(req) {
                debug!("Dropping stale posts failure ({req:?})");
                return UpdateResult::none();
            }
            state.posts = RemoteData::Failed(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Comments
        // ─────────────────────────────────────────────────────────
        Message::CommentCursorUp => {
            state.comment_cursor_up();
            UpdateResult::none()
        }

        Message::CommentCursorDown => {
            state.comment_cursor_down();
            UpdateResult::none()
        }

        Message::CommentsLoaded { req, comments } => {
            if state.selected_post.is_none() || !state.comments_req.is_current(req) {
                debug!("Dropping stale comments settle ({req:?})");
                return UpdateResult::none();
            }
            state.comments = RemoteData::Loaded(comments);
            state.comment_cursor = 0;
            UpdateResult::none()
        }

        Message::CommentsLoadFailed { req, error } => {
            if state.selected_post.is_none() || !state.comments_req.is_current(req) {
                debug!("Dropping stale comments failure ({req:?})");
                return UpdateResult::none();
            }
            state.comments = RemoteData::Failed(error);
            UpdateResult::none()
        }

        Message::DeleteComment => {
            let Some(comments) = state.comments.value_mut() else {
                return UpdateResult::none();
            };
            if state.comment_cursor >= comments.len() {
                return UpdateResult::none();
            }

            // Optimistic removal; a failed request does not restore it
            let removed = comments.remove(state.comment_cursor);
            state.clamp_comment_cursor();
            UpdateResult::fetch(FetchTask::DeleteComment {
                post_id: removed.post_id,
                comment_id: removed.id,
            })
        }

        Message::CommentDeleteFailed {
            post_id,
            comment_id,
            error,
        } => {
            if state.selected_post.as_ref().map(|p| p.id) != Some(post_id) {
                debug!("Dropping delete failure for closed post {post_id}: {error}");
                return UpdateResult::none();
            }
            warn!("Delete of comment {comment_id} failed: {error}");
            state.comments = RemoteData::Failed(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Comment Form
        // ─────────────────────────────────────────────────────────
        Message::OpenCommentForm => {
            if state.selected_post.is_some() && state.comments.value().is_some() {
                state.form.open();
                state.focus = Focus::Form;
            }
            UpdateResult::none()
        }

        Message::CloseCommentForm => {
            state.form.close();
            state.focus = Focus::Comments;
            UpdateResult::none()
        }

        Message::SubmitComment => {
            if state.form.submitting {
                return UpdateResult::none();
            }
            let Some(post_id) = state.selected_post.as_ref().map(|p| p.id) else {
                return UpdateResult::none();
            };

            match state.form.validate(post_id) {
                Some(payload) => {
                    state.form.submitting = true;
                    state.form.error = None;
                    UpdateResult::fetch(FetchTask::AddComment { payload })
                }
                None => UpdateResult::none(),
            }
        }

        Message::ClearCommentForm => {
            state.form.clear();
            UpdateResult::none()
        }

        Message::CommentAdded { post_id, comment } => {
            state.form.submit_succeeded();
            if state.selected_post.as_ref().map(|p| p.id) == Some(post_id) {
                if let Some(comments) = state.comments.value_mut() {
                    comments.push(comment);
                }
            }
            UpdateResult::none()
        }

        Message::CommentAddFailed { error } => {
            if state.form.open {
                state.form.submit_failed(error);
            } else {
                debug!("Add-comment failure after form closed: {error}");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            if state.selected_post.is_some() {
                state.focus = match state.focus {
                    Focus::Posts => Focus::Comments,
                    Focus::Comments | Focus::Form => Focus::Posts,
                };
            }
            UpdateResult::none()
        }
    }
}

/// Translate a key event into a message based on the current input context
fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Message> {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if state.form.open && state.focus == Focus::Form {
        return handle_form_key(state, key);
    }

    if state.user_menu.open {
        return handle_menu_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Char('u') => Some(Message::OpenUserMenu),
        KeyCode::Tab => Some(Message::FocusNext),
        KeyCode::Up | KeyCode::Char('k') => match state.focus {
            Focus::Comments => Some(Message::CommentCursorUp),
            _ => Some(Message::PostsCursorUp),
        },
        KeyCode::Down | KeyCode::Char('j') => match state.focus {
            Focus::Comments => Some(Message::CommentCursorDown),
            _ => Some(Message::PostsCursorDown),
        },
        KeyCode::Enter => match state.focus {
            Focus::Posts => Some(Message::TogglePost),
            _ => None,
        },
        KeyCode::Char('w') if state.focus == Focus::Comments => Some(Message::OpenCommentForm),
        KeyCode::Char('d') if state.focus == Focus::Comments => Some(Message::DeleteComment),
        KeyCode::Esc if state.focus == Focus::Comments => Some(Message::FocusNext),
        _ => None,
    }
}

/// Key routing while the comment form has focus
fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::CloseCommentForm),
        KeyCode::Enter => Some(Message::SubmitComment),
        KeyCode::Tab => {
            state.form.focus_next();
            None
        }
        KeyCode::BackTab => {
            state.form.focus_prev();
            None
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::ClearCommentForm)
        }
        KeyCode::Backspace => {
            state.form.backspace();
            None
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.form.insert_char(c);
            None
        }
        _ => None,
    }
}

/// Key routing while the user dropdown is open
fn handle_menu_key(state: &mut AppState, key: KeyEvent) -> Option<Message> {
    match key.code {
        // Losing focus closes the dropdown
        KeyCode::Esc | KeyCode::Char('u') | KeyCode::Char('q') => Some(Message::CloseUserMenu),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::UserMenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::UserMenuDown),
        KeyCode::Enter => {
            let user = state.users.value()?.get(state.user_menu.cursor)?.clone();
            Some(Message::SelectUser { user })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Comment, Post, User};

    fn user(id: i64) -> User {
        User {
            id,
            name: format!("User {id}"),
            username: String::new(),
            email: String::new(),
            phone: None,
        }
    }

    fn post(id: i64, user_id: i64) -> Post {
        Post {
            id,
            user_id,
            title: format!("Post {id}"),
            body: "body".into(),
        }
    }

    fn comment(id: i64, post_id: i64) -> Comment {
        Comment {
            id,
            post_id,
            name: format!("Commenter {id}"),
            email: "c@example.com".into(),
            body: "text".into(),
        }
    }

    fn state_with_users() -> AppState {
        let mut state = AppState::new("example.com");
        let _ = update(
            &mut state,
            Message::UsersLoaded {
                users: vec![user(1), user(2)],
            },
        );
        state
    }

    /// Drive a full user selection: select, then settle the posts fetch.
    fn select_user_with_posts(state: &mut AppState, u: User, posts: Vec<Post>) {
        let result = update(state, Message::SelectUser { user: u });
        let Some(UpdateAction::Fetch(FetchTask::Posts { req, .. })) = result.action else {
            panic!("expected posts fetch, got {:?}", result.action);
        };
        let _ = update(state, Message::PostsLoaded { req, posts });
    }

    /// Open the post under the cursor and settle its comments fetch.
    fn open_post_with_comments(state: &mut AppState, comments: Vec<Comment>) {
        let result = update(state, Message::TogglePost);
        let Some(UpdateAction::Fetch(FetchTask::Comments { req, .. })) = result.action else {
            panic!("expected comments fetch, got {:?}", result.action);
        };
        let _ = update(state, Message::CommentsLoaded { req, comments });
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new("x");
        let _ = update(&mut state, Message::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn test_users_load_failure_leaves_list_empty() {
        let mut state = AppState::new("x");
        let _ = update(
            &mut state,
            Message::UsersLoadFailed {
                error: "Failed to load users: timeout".into(),
            },
        );

        assert!(state.users.is_failed());
        assert!(state.selected_user.is_none());
    }

    #[test]
    fn test_select_user_enters_loading_and_fetches() {
        let mut state = state_with_users();

        let result = update(&mut state, Message::SelectUser { user: user(1) });

        assert_eq!(state.posts, RemoteData::Loading);
        assert!(matches!(
            result.action,
            Some(UpdateAction::Fetch(FetchTask::Posts { user_id: 1, .. }))
        ));
    }

    #[test]
    fn test_select_user_clears_previous_selection_before_settle() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![comment(100, 10)]);
        let _ = update(&mut state, Message::OpenCommentForm);
        assert!(state.form.open);

        // Select a different user; nothing has settled yet
        let _ = update(&mut state, Message::SelectUser { user: user(2) });

        assert_eq!(state.posts, RemoteData::Loading);
        assert!(state.selected_post.is_none());
        assert_eq!(state.comments, RemoteData::NotAsked);
        assert!(!state.form.open);
    }

    #[test]
    fn test_stale_posts_settle_is_dropped() {
        let mut state = state_with_users();

        let first = update(&mut state, Message::SelectUser { user: user(1) });
        let Some(UpdateAction::Fetch(FetchTask::Posts { req: stale, .. })) = first.action else {
            panic!("expected posts fetch");
        };

        let second = update(&mut state, Message::SelectUser { user: user(2) });
        let Some(UpdateAction::Fetch(FetchTask::Posts { req: fresh, .. })) = second.action else {
            panic!("expected posts fetch");
        };

        // The slow response for user 1 arrives after user 2 was selected
        let _ = update(
            &mut state,
            Message::PostsLoaded {
                req: stale,
                posts: vec![post(10, 1)],
            },
        );
        assert_eq!(state.posts, RemoteData::Loading);

        let _ = update(
            &mut state,
            Message::PostsLoaded {
                req: fresh,
                posts: vec![post(20, 2)],
            },
        );
        assert_eq!(state.posts.value().unwrap()[0].id, 20);
    }

    #[test]
    fn test_stale_posts_failure_is_dropped() {
        let mut state = state_with_users();

        let first = update(&mut state, Message::SelectUser { user: user(1) });
        let Some(UpdateAction::Fetch(FetchTask::Posts { req: stale, .. })) = first.action else {
            panic!("expected posts fetch");
        };
        let _ = update(&mut state, Message::SelectUser { user: user(2) });

        let _ = update(
            &mut state,
            Message::PostsLoadFailed {
                req: stale,
                error: "boom".into(),
            },
        );

        assert_eq!(state.posts, RemoteData::Loading);
    }

    #[test]
    fn test_posts_empty_vs_list() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![]);
        assert!(state.posts.is_empty_list());

        select_user_with_posts(&mut state, user(2), vec![post(1, 2)]);
        assert!(state.posts.is_nonempty_list());
    }

    #[test]
    fn test_toggle_same_post_twice_deselects() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1), post(11, 1)]);

        open_post_with_comments(&mut state, vec![]);
        assert_eq!(state.selected_post.as_ref().unwrap().id, 10);

        let _ = update(&mut state, Message::TogglePost);
        assert!(state.selected_post.is_none());
        assert_eq!(state.comments, RemoteData::NotAsked);
    }

    #[test]
    fn test_select_post_a_then_b_leaves_only_b() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1), post(11, 1)]);

        open_post_with_comments(&mut state, vec![comment(1, 10)]);
        assert_eq!(state.selected_post.as_ref().unwrap().id, 10);

        let _ = update(&mut state, Message::PostsCursorDown);
        open_post_with_comments(&mut state, vec![comment(2, 11)]);

        assert_eq!(state.selected_post.as_ref().unwrap().id, 11);
        assert_eq!(state.comments.value().unwrap()[0].id, 2);
    }

    #[test]
    fn test_post_change_resets_form_and_comments() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1), post(11, 1)]);
        open_post_with_comments(&mut state, vec![comment(1, 10)]);
        let _ = update(&mut state, Message::OpenCommentForm);
        assert!(state.form.open);

        let _ = update(&mut state, Message::PostsCursorDown);
        let result = update(&mut state, Message::TogglePost);

        assert!(!state.form.open);
        assert_eq!(state.comments, RemoteData::Loading);
        assert!(matches!(
            result.action,
            Some(UpdateAction::Fetch(FetchTask::Comments { post_id: 11, .. }))
        ));
    }

    #[test]
    fn test_stale_comments_settle_after_deselect_is_dropped() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);

        let result = update(&mut state, Message::TogglePost);
        let Some(UpdateAction::Fetch(FetchTask::Comments { req, .. })) = result.action else {
            panic!("expected comments fetch");
        };

        // Close the post before the fetch settles
        let _ = update(&mut state, Message::TogglePost);

        let _ = update(
            &mut state,
            Message::CommentsLoaded {
                req,
                comments: vec![comment(1, 10)],
            },
        );

        assert_eq!(state.comments, RemoteData::NotAsked);
    }

    #[test]
    fn test_submit_with_empty_fields_blocks_and_marks_errors() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![]);
        let _ = update(&mut state, Message::OpenCommentForm);

        state.form.name = "Ada".into();
        state.form.email = "  ".into();
        state.form.body = "hello".into();

        let result = update(&mut state, Message::SubmitComment);

        assert!(result.action.is_none());
        assert!(!state.form.submitting);
        assert!(state.form.errors.name.is_none());
        assert!(state.form.errors.email.is_some());
        assert!(state.form.errors.body.is_none());
    }

    #[test]
    fn test_submit_valid_form_sends_trimmed_payload() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![]);
        let _ = update(&mut state, Message::OpenCommentForm);

        state.form.name = " Ada ".into();
        state.form.email = "ada@example.com".into();
        state.form.body = " hi ".into();

        let result = update(&mut state, Message::SubmitComment);

        assert!(state.form.submitting);
        let Some(UpdateAction::Fetch(FetchTask::AddComment { payload })) = result.action else {
            panic!("expected add-comment fetch");
        };
        assert_eq!(payload.post_id, 10);
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.body, "hi");
    }

    #[test]
    fn test_duplicate_submit_blocked_while_in_flight() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![]);
        let _ = update(&mut state, Message::OpenCommentForm);

        state.form.name = "Ada".into();
        state.form.email = "a@b".into();
        state.form.body = "hi".into();

        let first = update(&mut state, Message::SubmitComment);
        assert!(first.action.is_some());

        let second = update(&mut state, Message::SubmitComment);
        assert!(second.action.is_none());
    }

    #[test]
    fn test_comment_added_appends_and_clears_fields() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![comment(1, 10)]);
        let _ = update(&mut state, Message::OpenCommentForm);
        state.form.name = "Ada".into();
        state.form.email = "a@b".into();
        state.form.body = "hi".into();
        let _ = update(&mut state, Message::SubmitComment);

        let _ = update(
            &mut state,
            Message::CommentAdded {
                post_id: 10,
                comment: comment(99, 10),
            },
        );

        let comments = state.comments.value().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments.last().unwrap().id, 99);
        assert!(state.form.open);
        assert!(state.form.name.is_empty());
        assert!(state.form.body.is_empty());
        assert!(!state.form.submitting);
    }

    #[test]
    fn test_comment_added_for_other_post_not_appended() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![]);

        let _ = update(
            &mut state,
            Message::CommentAdded {
                post_id: 11,
                comment: comment(99, 11),
            },
        );

        assert!(state.comments.value().unwrap().is_empty());
    }

    #[test]
    fn test_comment_add_failure_keeps_form_for_retry() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![comment(1, 10)]);
        let _ = update(&mut state, Message::OpenCommentForm);
        state.form.name = "Ada".into();
        state.form.email = "a@b".into();
        state.form.body = "hi".into();
        let _ = update(&mut state, Message::SubmitComment);

        let _ = update(
            &mut state,
            Message::CommentAddFailed {
                error: "Failed to add comment: 500".into(),
            },
        );

        assert!(state.form.open);
        assert_eq!(state.form.name, "Ada");
        assert!(state.form.error.is_some());
        // The comments list stays visible
        assert!(state.comments.is_nonempty_list());
    }

    #[test]
    fn test_delete_removes_immediately_and_requests_delete() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![comment(1, 10), comment(2, 10)]);
        state.focus = Focus::Comments;
        state.comment_cursor = 1;

        let result = update(&mut state, Message::DeleteComment);

        let comments = state.comments.value().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, 1);
        assert_eq!(state.comment_cursor, 0);
        assert!(matches!(
            result.action,
            Some(UpdateAction::Fetch(FetchTask::DeleteComment {
                post_id: 10,
                comment_id: 2
            }))
        ));
    }

    #[test]
    fn test_delete_failure_shows_error_without_restoring() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![comment(1, 10)]);
        state.focus = Focus::Comments;

        let _ = update(&mut state, Message::DeleteComment);
        let _ = update(
            &mut state,
            Message::CommentDeleteFailed {
                post_id: 10,
                comment_id: 1,
                error: "Failed to delete comment: 500".into(),
            },
        );

        assert!(state.comments.is_failed());
        assert!(state.comments.value().is_none());
    }

    #[test]
    fn test_delete_failure_for_closed_post_is_dropped() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1), post(11, 1)]);
        open_post_with_comments(&mut state, vec![comment(1, 10)]);
        state.focus = Focus::Comments;
        let _ = update(&mut state, Message::DeleteComment);

        // Move on to another post before the delete settles
        let _ = update(&mut state, Message::TogglePost);
        let _ = update(&mut state, Message::PostsCursorDown);
        open_post_with_comments(&mut state, vec![comment(2, 11)]);

        let _ = update(
            &mut state,
            Message::CommentDeleteFailed {
                post_id: 10,
                comment_id: 1,
                error: "Failed to delete comment: 500".into(),
            },
        );

        // The slow failure belongs to post 10; post 11's comments stay intact
        assert_eq!(state.comments.value().unwrap()[0].id, 2);
    }

    #[test]
    fn test_open_form_requires_loaded_comments() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        let _ = update(&mut state, Message::TogglePost); // comments still loading

        let _ = update(&mut state, Message::OpenCommentForm);
        assert!(!state.form.open);
    }

    #[test]
    fn test_open_menu_positions_cursor_on_selection() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(2), vec![]);

        let _ = update(&mut state, Message::OpenUserMenu);

        assert!(state.user_menu.open);
        assert_eq!(state.user_menu.cursor, 1);
    }

    #[test]
    fn test_menu_does_not_open_without_users() {
        let mut state = AppState::new("x");
        let _ = update(&mut state, Message::OpenUserMenu);
        assert!(!state.user_menu.open);
    }

    #[test]
    fn test_menu_key_enter_selects_user() {
        let mut state = state_with_users();
        let _ = update(&mut state, Message::OpenUserMenu);
        let _ = update(&mut state, Message::UserMenuDown);

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let msg = handle_key(&mut state, key).unwrap();

        match msg {
            Message::SelectUser { user } => assert_eq!(user.id, 2),
            other => panic!("expected SelectUser, got {other:?}"),
        }
    }

    #[test]
    fn test_form_key_typing_goes_to_focused_field() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![]);
        let _ = update(&mut state, Message::OpenCommentForm);

        let _ = handle_key(&mut state, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::NONE));
        let _ = handle_key(&mut state, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        let _ = handle_key(&mut state, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE));

        assert_eq!(state.form.name, "A");
        assert_eq!(state.form.email, "b");
    }

    #[test]
    fn test_q_types_into_form_instead_of_quitting() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![]);
        let _ = update(&mut state, Message::OpenCommentForm);

        let msg = handle_key(&mut state, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));

        assert!(msg.is_none());
        assert_eq!(state.form.name, "q");
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);
        open_post_with_comments(&mut state, vec![]);
        let _ = update(&mut state, Message::OpenCommentForm);

        let msg = handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(matches!(msg, Some(Message::Quit)));
    }

    #[test]
    fn test_focus_next_needs_open_post() {
        let mut state = state_with_users();
        select_user_with_posts(&mut state, user(1), vec![post(10, 1)]);

        let _ = update(&mut state, Message::FocusNext);
        assert_eq!(state.focus, Focus::Posts);

        open_post_with_comments(&mut state, vec![]);
        let _ = update(&mut state, Message::FocusNext);
        assert_eq!(state.focus, Focus::Comments);
    }

    #[test]
    fn test_exactly_one_posts_region_state() {
        // Walk the posts region through its lifecycle; at each step exactly
        // one display state holds.
        let mut state = state_with_users();

        let check = |state: &AppState| {
            let flags = [
                state.selected_user.is_none(),
                state.posts.is_loading(),
                state.posts.is_failed(),
                state.posts.is_empty_list(),
                state.posts.is_nonempty_list(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{:?}", state.posts);
        };

        check(&state);

        let result = update(&mut state, Message::SelectUser { user: user(1) });
        check(&state);

        let Some(UpdateAction::Fetch(FetchTask::Posts { req, .. })) = result.action else {
            panic!("expected posts fetch");
        };
        let _ = update(
            &mut state,
            Message::PostsLoadFailed {
                req,
                error: "boom".into(),
            },
        );
        check(&state);

        select_user_with_posts(&mut state, user(2), vec![]);
        check(&state);

        select_user_with_posts(&mut state, user(1), vec![post(1, 1)]);
        check(&state);
    }
}
