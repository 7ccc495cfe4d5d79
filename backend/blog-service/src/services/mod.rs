/// Business logic layer for blog-service
///
/// - Post service: CRUD with ownership enforcement
/// - Vote service: upvote toggling
/// - Comment service: comments on posts
///
/// Every operation takes the caller identity as an explicit argument.
pub mod comments;
pub mod posts;
pub mod votes;

pub use comments::CommentService;
pub use posts::PostService;
pub use votes::VoteService;
