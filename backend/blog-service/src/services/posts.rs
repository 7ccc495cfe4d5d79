/// Post service - listing, creation, retrieval, edits and deletion with
/// ownership enforcement
use crate::db::SharedStore;
use crate::error::{AppError, Result};
use crate::metrics::POST_MUTATIONS_TOTAL;
use crate::middleware::{check_post_deletion, check_post_update};
use crate::models::requests::decode_object;
use crate::models::{Post, PostPayload};
use uuid::Uuid;
use validator::Validate;

pub struct PostService {
    store: SharedStore,
}

impl PostService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All posts, oldest first
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        self.store.list_posts().await
    }

    /// Posts authored by `username`. An unknown username is NotFound rather
    /// than an empty list.
    pub async fn list_by_username(&self, username: &str) -> Result<Vec<Post>> {
        let user = self
            .store
            .find_user_by_username(username)
            .await?
            .ok_or_else(AppError::user_not_found)?;

        self.store.list_posts_by_author(user.id).await
    }

    /// Create a post from a JSON request body.
    pub async fn create(&self, caller_id: Uuid, body: &[u8]) -> Result<Post> {
        let payload = decode_object::<PostPayload>(body)?.normalized();
        payload.validate()?;
        let (title, body) = payload.into_fields();

        let post = self.store.insert_post(caller_id, &title, &body).await?;

        POST_MUTATIONS_TOTAL.with_label_values(&["create"]).inc();
        tracing::info!(post_id = %post.id, caller_id = %caller_id, "post created");
        Ok(post)
    }

    pub async fn get(&self, post_id: Uuid) -> Result<Post> {
        self.store
            .get_post(post_id)
            .await?
            .ok_or_else(AppError::post_not_found)
    }

    /// Replace title and body from a JSON request body.
    ///
    /// Order of checks: the post must exist, then the body must decode and
    /// validate, and only then is ownership checked. A non-owner sending an
    /// invalid payload therefore gets the validation error.
    pub async fn update(&self, caller_id: Uuid, post_id: Uuid, body: &[u8]) -> Result<Post> {
        let post = self.get(post_id).await?;

        let payload = decode_object::<PostPayload>(body)?.normalized();
        payload.validate()?;

        check_post_update(caller_id, &post)?;

        let (title, body) = payload.into_fields();
        let updated = self
            .store
            .update_post(post_id, &title, &body)
            .await?
            .ok_or_else(AppError::post_not_found)?;

        POST_MUTATIONS_TOTAL.with_label_values(&["update"]).inc();
        tracing::info!(post_id = %post_id, caller_id = %caller_id, "post updated");
        Ok(updated)
    }

    /// Delete a post and its upvotes. Comments on the post are not removed.
    pub async fn delete(&self, caller_id: Uuid, post_id: Uuid) -> Result<()> {
        let post = self.get(post_id).await?;
        check_post_deletion(caller_id, &post)?;

        if !self.store.delete_post(post_id).await? {
            return Err(AppError::post_not_found());
        }

        POST_MUTATIONS_TOTAL.with_label_values(&["delete"]).inc();
        tracing::info!(post_id = %post_id, caller_id = %caller_id, "post deleted");
        Ok(())
    }
}
