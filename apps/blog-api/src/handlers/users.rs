//! Registration, login and email verification handlers.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::services::RegisterUser;
use blog_infra::mask_email;
use blog_shared::dto::{
    LoginRequest, MessageResponse, RegisterUserRequest, TokenResponse, VerifyEmailRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Column widths of `users.name` and `users.email`.
const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 255;

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if req.name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::BadRequest(format!(
            "Name must be at most {MAX_NAME_CHARS} characters"
        )));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if req.email.chars().count() > MAX_EMAIL_CHARS {
        return Err(AppError::BadRequest(format!(
            "Email must be at most {MAX_EMAIL_CHARS} characters"
        )));
    }
    if req.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    let user = state
        .users
        .register(RegisterUser {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    tracing::info!(user_id = user.id, email = %mask_email(&user.email), "User registered");

    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
}

/// POST /login
///
/// Unknown email and wrong password produce the same 401.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let token = state
        .users
        .login(&req.email, &req.password)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } | DomainError::InvalidCredentials => {
                tracing::info!(email = %mask_email(&req.email), "Login rejected");
                AppError::Unauthorized("invalid credentials".to_string())
            }
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// POST /verify
pub async fn verify_email(
    state: web::Data<AppState>,
    body: web::Json<VerifyEmailRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    state.users.verify_email(&req.email, &req.token).await?;

    tracing::info!(email = %mask_email(&req.email), "Email verified");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Email verified successfully")))
}
