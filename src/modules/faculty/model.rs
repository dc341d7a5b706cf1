//! Faculty data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A faculty member record.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Faculty {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub designation: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new faculty member. Admin-only.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateFacultyDto {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub department: String,
    #[validate(length(min = 1))]
    pub designation: String,
}

/// DTO for updating a faculty record.
///
/// Used both by admins (any faculty record) and by faculty members
/// updating their own profile.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateFacultyDto {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub department: Option<String>,
    #[validate(length(min = 1))]
    pub designation: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
}
