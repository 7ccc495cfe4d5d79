/// Authorization predicates for blog-service
///
/// Ownership rules are plain comparisons between the caller and the author
/// recorded on the post at creation time.
use uuid::Uuid;

use crate::error::AppError;
use crate::metrics::AUTHORIZATION_DENIED_TOTAL;
use crate::models::Post;

/// Result type for permission checks
pub type PermissionResult = Result<(), AppError>;

/// Only the author may edit a post.
pub fn check_post_update(caller_id: Uuid, post: &Post) -> PermissionResult {
    check_post_ownership(caller_id, post, "update", "You are not authorized to edit this post")
}

/// Only the author may delete a post.
pub fn check_post_deletion(caller_id: Uuid, post: &Post) -> PermissionResult {
    check_post_ownership(
        caller_id,
        post,
        "delete",
        "You are not authorized to delete this post",
    )
}

fn check_post_ownership(
    caller_id: Uuid,
    post: &Post,
    operation: &str,
    message: &str,
) -> PermissionResult {
    if post.is_authored_by(caller_id) {
        return Ok(());
    }

    AUTHORIZATION_DENIED_TOTAL
        .with_label_values(&[operation])
        .inc();
    tracing::warn!(
        post_id = %post.id,
        caller_id = %caller_id,
        author_id = %post.author_id,
        operation,
        "ownership check failed"
    );

    Err(AppError::Unauthorized(message.to_string()))
}
