/// Vote service - toggles a caller's upvote on a post
use crate::db::SharedStore;
use crate::error::{AppError, Result};
use crate::metrics::UPVOTE_TOGGLES_TOTAL;
use crate::models::Post;
use uuid::Uuid;

pub struct VoteService {
    store: SharedStore,
}

impl VoteService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Add the caller's upvote if absent, remove it if present.
    ///
    /// The vote row and `upvote_count` change together inside the store, so
    /// the counter always equals the number of votes once this returns.
    pub async fn toggle_upvote(&self, caller_id: Uuid, post_id: Uuid) -> Result<Post> {
        let outcome = self
            .store
            .toggle_upvote(post_id, caller_id)
            .await?
            .ok_or_else(AppError::post_not_found)?;

        let action = if outcome.upvoted { "added" } else { "removed" };
        UPVOTE_TOGGLES_TOTAL.with_label_values(&[action]).inc();
        tracing::debug!(
            post_id = %post_id,
            caller_id = %caller_id,
            action,
            upvote_count = outcome.post.upvote_count,
            "upvote toggled"
        );

        Ok(outcome.post)
    }
}
