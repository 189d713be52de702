use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ApiServiceError;

/// Access-token claims. `sub` is the account login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

pub fn issue_access_token(
    login: &str,
    secret: &str,
    algorithm: Algorithm,
    expire_minutes: u64,
) -> Result<String, ApiServiceError> {
    let claims = TokenClaims {
        sub: login.to_owned(),
        exp: now_secs() + expire_minutes * 60,
    };
    encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiServiceError::Internal(e.into()))
}

/// Validate a bearer token and return its claims. Any decode failure
/// (bad signature, expired, malformed) maps to `Unauthorized`.
pub fn validate_token(
    token: &str,
    secret: &str,
    algorithm: Algorithm,
) -> Result<TokenClaims, ApiServiceError> {
    let mut validation = Validation::new(algorithm);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| ApiServiceError::Unauthorized)?;

    Ok(data.claims)
}
