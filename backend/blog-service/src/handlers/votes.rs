/// Upvote handler
use crate::db::SharedStore;
use crate::error::Result;
use crate::middleware::CallerId;
use crate::services::VoteService;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

/// POST /posts/{post_id}/upvote
pub async fn toggle_upvote(
    store: web::Data<SharedStore>,
    caller: CallerId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = VoteService::new(store.get_ref().clone());
    let post = service.toggle_upvote(caller.0, *post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}
