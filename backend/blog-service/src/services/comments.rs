/// Comment service - comment creation and listing scoped to a post
use crate::db::SharedStore;
use crate::error::{AppError, Result};
use crate::models::requests::decode_object;
use crate::models::{Comment, CommentPayload};
use uuid::Uuid;
use validator::Validate;

pub struct CommentService {
    store: SharedStore,
}

impl CommentService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    async fn ensure_post_exists(&self, post_id: Uuid) -> Result<()> {
        match self.store.get_post(post_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::post_not_found()),
        }
    }

    /// Comments for a post in insertion order
    pub async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        self.ensure_post_exists(post_id).await?;
        self.store.list_comments(post_id).await
    }

    /// Any authenticated caller may comment on any existing post. The body is
    /// only decoded once the post is known to exist.
    pub async fn create(&self, caller_id: Uuid, post_id: Uuid, body: &[u8]) -> Result<Comment> {
        self.ensure_post_exists(post_id).await?;

        let payload = decode_object::<CommentPayload>(body)?.normalized();
        payload.validate()?;

        let comment = self
            .store
            .insert_comment(post_id, caller_id, &payload.into_body())
            .await?;

        tracing::info!(comment_id = %comment.id, post_id = %post_id, caller_id = %caller_id, "comment created");
        Ok(comment)
    }
}
