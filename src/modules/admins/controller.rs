use crate::modules::admins::model::{Admin, UpdateAdminDto};
use crate::modules::admins::service::AdminService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/admin/{id}",
    params(
        ("id" = Uuid, Path, description = "Admin ID")
    ),
    responses(
        (status = 200, description = "Admin profile", body = Admin),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - own profile only", body = ErrorResponse),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admins"
)]
#[instrument]
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Admin>, AppError> {
    let admin = AdminService::get_admin_by_id(&state.db, id).await?;
    Ok(Json(admin))
}

#[utoipa::path(
    put,
    path = "/api/admin/{id}",
    params(
        ("id" = Uuid, Path, description = "Admin ID")
    ),
    request_body = UpdateAdminDto,
    responses(
        (status = 200, description = "Admin profile updated", body = Admin),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - own profile only", body = ErrorResponse),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admins"
)]
#[instrument(skip(dto))]
pub async fn update_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateAdminDto>,
) -> Result<Json<Admin>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let admin = AdminService::update_admin(&state.db, id, dto).await?;
    Ok(Json(admin))
}
