//! Credential verification.
//!
//! Extracts the bearer token from the `Authorization` header and validates
//! its signature and expiry against the [`JwtConfig`] injected at startup.
//! A missing header is a distinct rejection from a present-but-invalid
//! token.

use axum::http::{HeaderMap, header};

use crate::config::jwt::JwtConfig;
use crate::middleware::principal::Claims;
use crate::utils::errors::AccessError;
use crate::utils::jwt::verify_token;

/// Pulls the raw token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AccessError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AccessError::MissingCredential)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AccessError::InvalidCredential)
}

/// Verifies the request's bearer credential and returns its claims.
///
/// Pure function of (headers, config, current time); no store access
/// happens here, so a missing or broken credential never triggers a
/// lookup.
pub fn verify_credential(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<Claims, AccessError> {
    let token = bearer_token(headers)?;
    verify_token(token, jwt_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AccessError::MissingCredential)
        ));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert!(matches!(
            bearer_token(&headers),
            Err(AccessError::InvalidCredential)
        ));
    }

    #[test]
    fn test_bearer_token_extracts_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
