/// Database access layer
///
/// `BlogStore` is the seam between the services and persistence. Two
/// implementations exist:
/// - `PgStore`: PostgreSQL through sqlx, used in deployments
/// - `InMemoryStore`: process-local state, used for development and tests
pub mod memory_store;
pub mod pg_store;

pub use memory_store::InMemoryStore;
pub use pg_store::PgStore;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::models::{Comment, Post, ToggleOutcome, User};
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Store handle shared by handlers and services
pub type SharedStore = Arc<dyn BlogStore>;

/// Persistence operations required by the post, vote and comment services.
///
/// Implementations must apply `toggle_upvote` and `delete_post` as single
/// atomic units: concurrent toggles on one post must be equivalent to some
/// serial ordering of them.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Cheap round trip used by readiness checks.
    async fn ping(&self) -> Result<()>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// All posts, oldest first.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Posts written by `author_id`, oldest first.
    async fn list_posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>>;

    async fn insert_post(&self, author_id: Uuid, title: &str, body: &str) -> Result<Post>;

    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>>;

    /// Replace title and body. The upvote counter is left untouched.
    async fn update_post(&self, post_id: Uuid, title: &str, body: &str) -> Result<Option<Post>>;

    /// Remove the post together with its upvotes. Comments are kept.
    async fn delete_post(&self, post_id: Uuid) -> Result<bool>;

    /// Add the caller's vote if absent, remove it if present, and move the
    /// counter by one in the same unit. `None` when the post does not exist.
    async fn toggle_upvote(&self, post_id: Uuid, user_id: Uuid) -> Result<Option<ToggleOutcome>>;

    async fn has_upvote(&self, post_id: Uuid, user_id: Uuid) -> Result<bool>;

    async fn count_upvotes(&self, post_id: Uuid) -> Result<i64>;

    /// Comments on a post in insertion order.
    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>>;

    async fn insert_comment(&self, post_id: Uuid, author_id: Uuid, body: &str) -> Result<Comment>;
}

/// Create the PostgreSQL pool and bring the schema up to date.
pub async fn init_pool(config: &DatabaseConfig) -> std::result::Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "Creating database pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .test_before_acquire(true)
        .connect(&config.url)
        .await?;

    MIGRATOR.run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
