/// Post handlers - HTTP endpoints for post operations
use crate::db::SharedStore;
use crate::error::Result;
use crate::middleware::CallerId;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

/// GET /posts
pub async fn list_posts(store: web::Data<SharedStore>, _caller: CallerId) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let posts = service.list_all().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /posts
pub async fn create_post(
    store: web::Data<SharedStore>,
    caller: CallerId,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let post = service.create(caller.0, &body).await?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /posts/{post_id}
pub async fn get_post(
    store: web::Data<SharedStore>,
    _caller: CallerId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let post = service.get(*post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{post_id}
pub async fn update_post(
    store: web::Data<SharedStore>,
    caller: CallerId,
    post_id: web::Path<Uuid>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let post = service.update(caller.0, *post_id, &body).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{post_id}
pub async fn delete_post(
    store: web::Data<SharedStore>,
    caller: CallerId,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    service.delete(caller.0, *post_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "Res": "Object deleted!" })))
}

/// GET /users/{username}/posts
pub async fn get_user_posts(
    store: web::Data<SharedStore>,
    _caller: CallerId,
    username: web::Path<String>,
) -> Result<HttpResponse> {
    let service = PostService::new(store.get_ref().clone());
    let posts = service.list_by_username(&username).await?;

    Ok(HttpResponse::Ok().json(posts))
}
