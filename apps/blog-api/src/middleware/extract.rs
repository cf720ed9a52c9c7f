//! Request extractors and extractor configuration.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use super::error::AppError;

/// Header carrying the acting user's id on like endpoints.
pub const USER_ID_HEADER: &str = "UserID";

/// User id taken verbatim from the `UserID` header.
///
/// The value is not checked against the bearer token.
#[derive(Debug, Clone, Copy)]
pub struct HeaderUserId(pub i64);

impl FromRequest for HeaderUserId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok());

        match parsed {
            Some(id) => ready(Ok(HeaderUserId(id))),
            None => ready(Err(AppError::BadRequest("Invalid user ID".to_string()))),
        }
    }
}

/// Malformed JSON bodies become 400 problem documents.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid request: {}", err)).into()
    })
}

/// Unparseable path segments are 400, not actix's default 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid path parameter: {}", err)).into()
    })
}
