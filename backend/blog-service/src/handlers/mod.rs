/// HTTP handlers for blog endpoints
///
/// - Posts: list, create, read, update, delete, list by author
/// - Votes: toggle the caller's upvote
/// - Comments: list and add comments on a post
///
/// All routes sit behind `JwtAuthMiddleware`.
pub mod comments;
pub mod posts;
pub mod votes;

pub use comments::{create_comment, get_post_comments};
pub use posts::{create_post, delete_post, get_post, get_user_posts, list_posts, update_post};
pub use votes::toggle_upvote;

use crate::error::AppError;
use crate::middleware::JwtAuthMiddleware;
use actix_web::web;

/// Register extractor settings and the blog routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // A path segment that is not a UUID cannot name an existing post.
    cfg.app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::post_not_found().into()))
    .service(
        web::scope("/posts")
            .wrap(JwtAuthMiddleware)
            .service(
                web::resource("")
                    .route(web::get().to(list_posts))
                    .route(web::post().to(create_post)),
            )
            .service(
                web::resource("/{post_id}")
                    .route(web::get().to(get_post))
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post)),
            )
            .service(web::resource("/{post_id}/upvote").route(web::post().to(toggle_upvote)))
            .service(
                web::resource("/{post_id}/comments")
                    .route(web::get().to(get_post_comments))
                    .route(web::post().to(create_comment)),
            ),
    )
    .service(
        web::scope("/users")
            .wrap(JwtAuthMiddleware)
            .service(web::resource("/{username}/posts").route(web::get().to(get_user_posts))),
    );
}
