/// Comment handlers - HTTP endpoints for comment operations
use crate::db::SharedStore;
use crate::error::Result;
use crate::middleware::CallerId;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

/// GET /posts/{post_id}/comments
pub async fn get_post_comments(
    store: web::Data<SharedStore>,
    _caller: CallerId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new(store.get_ref().clone());
    let comments = service.list_by_post(*post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// POST /posts/{post_id}/comments
pub async fn create_comment(
    store: web::Data<SharedStore>,
    caller: CallerId,
    post_id: web::Path<Uuid>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let service = CommentService::new(store.get_ref().clone());
    let comment = service.create(caller.0, *post_id, &body).await?;

    Ok(HttpResponse::Created().json(comment))
}
