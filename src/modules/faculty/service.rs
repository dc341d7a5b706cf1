use crate::{
    modules::faculty::model::{CreateFacultyDto, Faculty, UpdateFacultyDto},
    utils::{errors::AppError, password::hash_password},
};
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub struct FacultyService;

impl FacultyService {
    #[instrument(skip(db, dto))]
    pub async fn create_faculty(db: &PgPool, dto: CreateFacultyDto) -> Result<Faculty, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            INSERT INTO faculty (first_name, last_name, email, password, phone, department, designation)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, phone, department, designation,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(hashed_password)
        .bind(&dto.phone)
        .bind(&dto.department)
        .bind(&dto.designation)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Faculty member with email {} already exists",
                        dto.email
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(faculty)
    }

    #[instrument(skip(db))]
    pub async fn get_all_faculty(db: &PgPool) -> Result<Vec<Faculty>, AppError> {
        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            SELECT id, first_name, last_name, email, phone, department, designation,
                   created_at, updated_at
            FROM faculty
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch faculty")
        .map_err(AppError::database)?;

        Ok(faculty)
    }

    #[instrument(skip(db))]
    pub async fn get_faculty_by_id(db: &PgPool, id: Uuid) -> Result<Faculty, AppError> {
        let faculty = sqlx::query_as::<_, Faculty>(
            r#"
            SELECT id, first_name, last_name, email, phone, department, designation,
                   created_at, updated_at
            FROM faculty
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch faculty by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Faculty member not found")))?;

        Ok(faculty)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_faculty(
        db: &PgPool,
        id: Uuid,
        dto: UpdateFacultyDto,
    ) -> Result<Faculty, AppError> {
        let existing = Self::get_faculty_by_id(db, id).await?;

        let first_name = dto.first_name.unwrap_or(existing.first_name);
        let last_name = dto.last_name.unwrap_or(existing.last_name);
        let email = dto.email.unwrap_or(existing.email);
        let phone = dto.phone.or(existing.phone);
        let department = dto.department.unwrap_or(existing.department);
        let designation = dto.designation.unwrap_or(existing.designation);

        let updated = if let Some(password) = dto.password {
            let hashed_password = hash_password(&password)?;
            sqlx::query_as::<_, Faculty>(
                r#"
                UPDATE faculty
                SET first_name = $1, last_name = $2, email = $3, phone = $4,
                    department = $5, designation = $6, password = $7, updated_at = NOW()
                WHERE id = $8
                RETURNING id, first_name, last_name, email, phone, department, designation,
                          created_at, updated_at
                "#,
            )
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(phone)
            .bind(department)
            .bind(designation)
            .bind(hashed_password)
            .bind(id)
            .fetch_one(db)
            .await
        } else {
            sqlx::query_as::<_, Faculty>(
                r#"
                UPDATE faculty
                SET first_name = $1, last_name = $2, email = $3, phone = $4,
                    department = $5, designation = $6, updated_at = NOW()
                WHERE id = $7
                RETURNING id, first_name, last_name, email, phone, department, designation,
                          created_at, updated_at
                "#,
            )
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(phone)
            .bind(department)
            .bind(designation)
            .bind(id)
            .fetch_one(db)
            .await
        }
        .context("Failed to update faculty")
        .map_err(AppError::database)?;

        Ok(updated)
    }

    #[instrument(skip(db))]
    pub async fn delete_faculty(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM faculty WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete faculty")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Faculty member not found"
            )));
        }

        Ok(())
    }
}
