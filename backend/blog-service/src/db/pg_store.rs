use super::BlogStore;
use crate::error::Result;
use crate::models::{Comment, Post, ToggleOutcome, User};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed entity store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, body, upvote_count, created_at, updated_at
            FROM posts
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn list_posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, body, upvote_count, created_at, updated_at
            FROM posts
            WHERE author_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn insert_post(&self, author_id: Uuid, title: &str, body: &str) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, author_id, title, body, upvote_count)
            VALUES ($1, $2, $3, $4, 0)
            RETURNING id, author_id, title, body, upvote_count, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(author_id)
        .bind(title)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, body, upvote_count, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn update_post(&self, post_id: Uuid, title: &str, body: &str) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, body = $2, updated_at = clock_timestamp()
            WHERE id = $3
            RETURNING id, author_id, title, body, upvote_count, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let removed_votes = sqlx::query("DELETE FROM upvotes WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        tx.commit().await?;

        tracing::debug!(%post_id, deleted, removed_votes, "post delete applied");
        Ok(deleted)
    }

    async fn toggle_upvote(&self, post_id: Uuid, user_id: Uuid) -> Result<Option<ToggleOutcome>> {
        let mut tx = self.pool.begin().await?;

        // Row lock on the post serialises every toggle targeting it.
        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
                .bind(post_id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let removed = sqlx::query("DELETE FROM upvotes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        let delta: i64 = if removed {
            -1
        } else {
            sqlx::query("INSERT INTO upvotes (post_id, user_id) VALUES ($1, $2)")
                .bind(post_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            1
        };

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET upvote_count = upvote_count + $1
            WHERE id = $2
            RETURNING id, author_id, title, body, upvote_count, created_at, updated_at
            "#,
        )
        .bind(delta)
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(ToggleOutcome {
            post,
            upvoted: !removed,
        }))
    }

    async fn has_upvote(&self, post_id: Uuid, user_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM upvotes
                WHERE post_id = $1 AND user_id = $2
            )
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn count_upvotes(&self, post_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM upvotes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author_id, body, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn insert_comment(&self, post_id: Uuid, author_id: Uuid, body: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, post_id, author_id, body)
            VALUES ($1, $2, $3, $4)
            RETURNING id, post_id, author_id, body, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(post_id)
        .bind(author_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }
}
