//! Like handlers. The acting user comes from the `UserID` header.

use actix_web::{HttpResponse, web};

use blog_shared::dto::LikesCountResponse;

use crate::middleware::error::AppResult;
use crate::middleware::extract::HeaderUserId;
use crate::state::AppState;

/// POST /posts/{postID}/like
pub async fn add_like(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    user: HeaderUserId,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    state.likes.add(post_id, user.0).await?;

    Ok(HttpResponse::Created().finish())
}

/// DELETE /posts/{postID}/like
pub async fn remove_like(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    user: HeaderUserId,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let removed = state.likes.remove(post_id, user.0).await?;
    tracing::debug!(post_id, user_id = user.0, removed, "Likes removed");

    Ok(HttpResponse::NoContent().finish())
}

/// GET /posts/{postID}/likes
pub async fn count_likes(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let likes = state.likes.count(post_id).await?;

    Ok(HttpResponse::Ok().json(LikesCountResponse { likes }))
}
