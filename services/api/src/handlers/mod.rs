pub mod account;
pub mod download;
pub mod health;
pub mod image;
pub mod page;
pub mod player;
pub mod site;

use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};

use crate::error::ApiServiceError;

pub type BearerHeader = TypedHeader<Authorization<Bearer>>;

/// A missing or malformed Authorization header reads as "no credentials",
/// the same response a bad token gets.
pub fn bearer_token(header: &Option<BearerHeader>) -> Result<&str, ApiServiceError> {
    header
        .as_ref()
        .map(|h| h.token())
        .ok_or(ApiServiceError::Unauthorized)
}
