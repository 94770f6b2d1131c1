//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::app::message::Message;
use crate::app::{FetchTask, UpdateAction};
use crate::common::prelude::*;

/// Execute an action by spawning a background task.
///
/// Each fetch runs to completion and reports back over the message channel;
/// the event loop never blocks on the network. Error display strings are
/// composed here so the handler only ever stores them.
pub fn handle_action(action: UpdateAction, client: ApiClient, msg_tx: mpsc::Sender<Message>) {
    let UpdateAction::Fetch(task) = action;
    tokio::spawn(async move {
        let Some(reply) = execute_fetch(task, &client).await else {
            return;
        };
        if msg_tx.send(reply).await.is_err() {
            debug!("Message channel closed; dropping fetch result");
        }
    });
}

/// Run one fetch; `None` means there is nothing to report back.
async fn execute_fetch(task: FetchTask, client: &ApiClient) -> Option<Message> {
    let message = match task {
        FetchTask::Users => match client.users().await {
            Ok(users) => Message::UsersLoaded { users },
            Err(e) => Message::UsersLoadFailed {
                error: format!("Failed to load users: {e}"),
            },
        },

        FetchTask::Posts { user_id, req } => match client.posts_for_user(user_id).await {
            Ok(posts) => Message::PostsLoaded { req, posts },
            Err(e) => Message::PostsLoadFailed {
                req,
                error: format!("Failed to load posts: {e}"),
            },
        },

        FetchTask::Comments { post_id, req } => match client.comments_for_post(post_id).await {
            Ok(comments) => Message::CommentsLoaded { req, comments },
            Err(e) => Message::CommentsLoadFailed {
                req,
                error: format!("Failed to load comments: {e}"),
            },
        },

        FetchTask::AddComment { payload } => {
            let post_id = payload.post_id;
            match client.create_comment(&payload).await {
                Ok(comment) => Message::CommentAdded { post_id, comment },
                Err(e) => Message::CommentAddFailed {
                    error: format!("Failed to add comment: {e}"),
                },
            }
        }

        // The removal was already applied; only a failure needs reporting
        FetchTask::DeleteComment {
            post_id,
            comment_id,
        } => match client.delete_comment(comment_id).await {
            Ok(()) => {
                info!("Deleted comment {comment_id}");
                return None;
            }
            Err(e) => Message::CommentDeleteFailed {
                post_id,
                comment_id,
                error: format!("Failed to delete comment: {e}"),
            },
        },
    };
    Some(message)
}
