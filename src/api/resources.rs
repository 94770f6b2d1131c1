//! Typed resource accessors
//!
//! One method per domain operation, each mapping to exactly one HTTP call.

use crate::common::prelude::*;
use crate::core::{Comment, NewComment, Post, User};

use super::client::ApiClient;

impl ApiClient {
    /// List all users.
    pub async fn users(&self) -> Result<Vec<User>> {
        self.get_json(&["users"], &[]).await
    }

    /// List the posts belonging to one user.
    pub async fn posts_for_user(&self, user_id: i64) -> Result<Vec<Post>> {
        self.get_json(&["posts"], &[("userId", user_id.to_string())])
            .await
    }

    /// List the comments belonging to one post.
    pub async fn comments_for_post(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.get_json(&["comments"], &[("postId", post_id.to_string())])
            .await
    }

    /// Create a comment. The server assigns and returns the id.
    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        self.post_json(&["comments"], comment).await
    }

    /// Delete a comment by id.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<()> {
        self.delete(&["comments", &comment_id.to_string()]).await
    }
}
