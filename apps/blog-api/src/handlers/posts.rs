//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, Post};
use blog_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Column width of `posts.title`.
const MAX_TITLE_CHARS: usize = 255;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        user_id: post.user_id,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }

    let post = state
        .posts
        .create(NewPost {
            user_id: req.user_id,
            title: req.title,
            content: req.content,
        })
        .await?;

    tracing::info!(post_id = post.id, user_id = post.user_id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /posts/{userID}
pub async fn list_posts_by_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    let posts: Vec<PostResponse> = state
        .posts
        .list_by_user(user_id)
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// DELETE /posts/{postID}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    state.posts.delete(post_id).await?;

    tracing::info!(post_id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}
