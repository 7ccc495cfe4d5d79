/// Data models for blog-service
///
/// - User: identity owned by the authentication collaborator, read-only here
/// - Post: blog post with a cached upvote counter
/// - Upvote: one vote per (post, user)
/// - Comment: immutable comment attached to a post
pub mod requests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use requests::{CommentPayload, PostPayload};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

/// Blog post.
///
/// `upvote_count` mirrors the number of rows in the upvote relation for this
/// post and is only ever changed together with that relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub upvote_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Upvote {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Result of flipping a user's vote on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub post: Post,
    /// true when the vote was added, false when it was removed
    pub upvoted: bool,
}
