use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::principal::Role;
use crate::modules::admins::model::{Admin, UpdateAdminDto};
use crate::modules::faculty::model::{CreateFacultyDto, Faculty, UpdateFacultyDto};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::admins::controller::get_admin,
        crate::modules::admins::controller::update_admin,
        crate::modules::faculty::controller::create_faculty,
        crate::modules::faculty::controller::get_all_faculty,
        crate::modules::faculty::controller::get_faculty,
        crate::modules::faculty::controller::update_faculty,
        crate::modules::faculty::controller::delete_faculty,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            Role,
            Admin,
            UpdateAdminDto,
            Faculty,
            CreateFacultyDto,
            UpdateFacultyDto,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admins", description = "Administrator profile endpoints"),
        (name = "Faculty", description = "Faculty record management endpoints"),
        (name = "Students", description = "Student record management endpoints")
    ),
    info(
        title = "Registrar API",
        version = "0.1.0",
        description = "Student records API with role-based access control for admins, faculty, and students.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
