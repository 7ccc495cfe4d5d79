use super::BlogStore;
use crate::error::Result;
use crate::models::{Comment, Post, ToggleOutcome, User};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct State {
    users: Vec<User>,
    /// insertion ordered
    posts: Vec<Post>,
    upvotes: HashSet<(Uuid, Uuid)>,
    /// insertion ordered
    comments: Vec<Comment>,
}

impl State {
    fn post_mut(&mut self, post_id: Uuid) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }
}

/// Process-local entity store.
///
/// Every operation runs under one lock, so each mutation is atomic and
/// concurrent mutations are applied in some serial order.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Accounts are normally provisioned by the
    /// authentication service; this stands in for it.
    pub async fn insert_user(&self, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };
        self.state.write().await.users.push(user.clone());
        user
    }
}

#[async_trait]
impl BlogStore for InMemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.state.read().await.posts.clone())
    }

    async fn list_posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>> {
        let state = self.state.read().await;
        Ok(state
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn insert_post(&self, author_id: Uuid, title: &str, body: &str) -> Result<Post> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            author_id,
            title: title.to_string(),
            body: body.to_string(),
            upvote_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.state.write().await.posts.push(post.clone());
        Ok(post)
    }

    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        let state = self.state.read().await;
        Ok(state.posts.iter().find(|p| p.id == post_id).cloned())
    }

    async fn update_post(&self, post_id: Uuid, title: &str, body: &str) -> Result<Option<Post>> {
        let mut state = self.state.write().await;
        Ok(state.post_mut(post_id).map(|post| {
            post.title = title.to_string();
            post.body = body.to_string();
            post.updated_at = Utc::now();
            post.clone()
        }))
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        let mut state = self.state.write().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.id != post_id);
        if state.posts.len() == before {
            return Ok(false);
        }
        state.upvotes.retain(|(voted_post, _)| *voted_post != post_id);
        Ok(true)
    }

    async fn toggle_upvote(&self, post_id: Uuid, user_id: Uuid) -> Result<Option<ToggleOutcome>> {
        let mut state = self.state.write().await;
        if state.post_mut(post_id).is_none() {
            return Ok(None);
        }

        let upvoted = if state.upvotes.remove(&(post_id, user_id)) {
            false
        } else {
            state.upvotes.insert((post_id, user_id));
            true
        };

        let Some(post) = state.post_mut(post_id) else {
            return Ok(None);
        };
        post.upvote_count += if upvoted { 1 } else { -1 };

        Ok(Some(ToggleOutcome {
            post: post.clone(),
            upvoted,
        }))
    }

    async fn has_upvote(&self, post_id: Uuid, user_id: Uuid) -> Result<bool> {
        Ok(self.state.read().await.upvotes.contains(&(post_id, user_id)))
    }

    async fn count_upvotes(&self, post_id: Uuid) -> Result<i64> {
        let state = self.state.read().await;
        Ok(state.upvotes.iter().filter(|(p, _)| *p == post_id).count() as i64)
    }

    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        let state = self.state.read().await;
        Ok(state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn insert_comment(&self, post_id: Uuid, author_id: Uuid, body: &str) -> Result<Comment> {
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            body: body.to_string(),
            created_at: Utc::now(),
        };
        self.state.write().await.comments.push(comment.clone());
        Ok(comment)
    }
}
