use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error as ThisError;
use utoipa::ToSchema;

/// Error body shape returned by all failure responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Terminal rejection produced by the access-control pipeline.
///
/// Every variant is fail-closed: the request never reaches a handler once
/// one of these is raised. Credential and resolution failures map to 401,
/// authorization denials to 403, and a failing account store to 500 so a
/// transient outage is never reported to the caller as "unauthorized".
#[derive(Debug, ThisError)]
pub enum AccessError {
    #[error("Missing authorization header")]
    MissingCredential,
    #[error("Invalid authentication token")]
    InvalidCredential,
    #[error("Authentication token has expired")]
    ExpiredCredential,
    #[error("Unrecognized role in authentication token")]
    UnknownRole,
    #[error("Account no longer exists")]
    PrincipalNotFound,
    #[error("Access denied. Your role is not permitted for this resource")]
    RoleDenied,
    #[error("Access denied. You may only access your own record")]
    OwnershipDenied,
    #[error("Account lookup failed: {0}")]
    UpstreamLookupFailure(Error),
}

impl AccessError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccessError::MissingCredential
            | AccessError::InvalidCredential
            | AccessError::ExpiredCredential
            | AccessError::UnknownRole
            | AccessError::PrincipalNotFound => StatusCode::UNAUTHORIZED,
            AccessError::RoleDenied | AccessError::OwnershipDenied => StatusCode::FORBIDDEN,
            AccessError::UpstreamLookupFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}
