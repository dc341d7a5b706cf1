use crate::middleware::access::CurrentPrincipal;
use crate::modules::faculty::model::{CreateFacultyDto, Faculty, UpdateFacultyDto};
use crate::modules::faculty::service::FacultyService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/admin/faculty",
    request_body = CreateFacultyDto,
    responses(
        (status = 200, description = "Faculty member created", body = Faculty),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admins only", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Faculty"
)]
#[instrument(skip(dto))]
pub async fn create_faculty(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Json(dto): Json<CreateFacultyDto>,
) -> Result<Json<Faculty>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let faculty = FacultyService::create_faculty(&state.db, dto).await?;
    info!(actor = %principal.id(), faculty_id = %faculty.id, "faculty member created");
    Ok(Json(faculty))
}

#[utoipa::path(
    get,
    path = "/api/admin/faculty",
    responses(
        (status = 200, description = "List of faculty members", body = [Faculty]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admins only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Faculty"
)]
#[instrument]
pub async fn get_all_faculty(State(state): State<AppState>) -> Result<Json<Vec<Faculty>>, AppError> {
    let faculty = FacultyService::get_all_faculty(&state.db).await?;
    Ok(Json(faculty))
}

/// Fetch a faculty record.
///
/// Also mounted at `/api/admin/faculty/{id}`, where admins address any
/// faculty record; this path binds faculty members to their own.
#[utoipa::path(
    get,
    path = "/api/faculty/{id}",
    params(
        ("id" = Uuid, Path, description = "Faculty ID")
    ),
    responses(
        (status = 200, description = "Faculty member", body = Faculty),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Faculty member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Faculty"
)]
#[instrument]
pub async fn get_faculty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Faculty>, AppError> {
    let faculty = FacultyService::get_faculty_by_id(&state.db, id).await?;
    Ok(Json(faculty))
}

/// Update a faculty record.
///
/// Also mounted at `/api/admin/faculty/{id}`, where admins address any
/// faculty record; this path binds faculty members to their own.
#[utoipa::path(
    put,
    path = "/api/faculty/{id}",
    params(
        ("id" = Uuid, Path, description = "Faculty ID")
    ),
    request_body = UpdateFacultyDto,
    responses(
        (status = 200, description = "Faculty member updated", body = Faculty),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse),
        (status = 404, description = "Faculty member not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Faculty"
)]
#[instrument(skip(dto))]
pub async fn update_faculty(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateFacultyDto>,
) -> Result<Json<Faculty>, AppError> {
    dto.validate()
        .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

    let faculty = FacultyService::update_faculty(&state.db, id, dto).await?;
    Ok(Json(faculty))
}

#[utoipa::path(
    delete,
    path = "/api/admin/faculty/{id}",
    params(
        ("id" = Uuid, Path, description = "Faculty ID")
    ),
    responses(
        (status = 200, description = "Faculty member deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - admins only", body = ErrorResponse),
        (status = 404, description = "Faculty member not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Faculty"
)]
#[instrument]
pub async fn delete_faculty(
    State(state): State<AppState>,
    CurrentPrincipal(principal): CurrentPrincipal,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    FacultyService::delete_faculty(&state.db, id).await?;
    info!(actor = %principal.id(), faculty_id = %id, "faculty member deleted");
    Ok(Json(serde_json::json!({ "message": "Faculty member deleted" })))
}
