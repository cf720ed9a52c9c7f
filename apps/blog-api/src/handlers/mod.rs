//! HTTP handlers and route configuration.

mod health;
mod likes;
mod posts;
mod users;


use actix_web::web;

use crate::middleware::extract::{json_config, path_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        // Public routes
        .route("/health", web::get().to(health::health_check))
        // User routes
        .route("/register", web::post().to(users::register))
        .route("/login", web::post().to(users::login))
        .route("/verify", web::post().to(users::verify_email))
        // Post routes. GET takes a user id, DELETE a post id.
        .service(web::resource("/posts").route(web::post().to(posts::create_post)))
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::list_posts_by_user))
                .route(web::delete().to(posts::delete_post)),
        )
        // Like routes
        .service(
            web::resource("/posts/{post_id}/like")
                .route(web::post().to(likes::add_like))
                .route(web::delete().to(likes::remove_like)),
        )
        .service(web::resource("/posts/{post_id}/likes").route(web::get().to(likes::count_likes)));
}
