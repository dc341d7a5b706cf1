use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::middleware::principal::{Claims, Role};
use crate::utils::errors::{AccessError, AppError};

pub fn create_access_token(
    subject_id: Uuid,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = (now as i64 + jwt_config.access_token_expiry) as usize;

    let claims = Claims {
        sub: subject_id.to_string(),
        role: role.as_str().to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Checks signature and expiry against the injected config and current time.
/// An expired token is reported distinctly from a malformed or forged one.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AccessError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AccessError::ExpiredCredential,
        _ => AccessError::InvalidCredential,
    })
}
