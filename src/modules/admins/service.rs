use crate::{
    modules::admins::model::{Admin, UpdateAdminDto},
    utils::{errors::AppError, password::hash_password},
};
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub struct AdminService;

impl AdminService {
    #[instrument(skip(db))]
    pub async fn get_admin_by_id(db: &PgPool, id: Uuid) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, first_name, last_name, email, phone, created_at, updated_at
            FROM admins
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch admin by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Admin not found")))?;

        Ok(admin)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_admin(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAdminDto,
    ) -> Result<Admin, AppError> {
        let existing = Self::get_admin_by_id(db, id).await?;

        let first_name = dto.first_name.unwrap_or(existing.first_name);
        let last_name = dto.last_name.unwrap_or(existing.last_name);
        let email = dto.email.unwrap_or(existing.email);
        let phone = dto.phone.or(existing.phone);

        let updated = if let Some(password) = dto.password {
            let hashed_password = hash_password(&password)?;
            sqlx::query_as::<_, Admin>(
                r#"
                UPDATE admins
                SET first_name = $1, last_name = $2, email = $3, phone = $4,
                    password = $5, updated_at = NOW()
                WHERE id = $6
                RETURNING id, first_name, last_name, email, phone, created_at, updated_at
                "#,
            )
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(phone)
            .bind(hashed_password)
            .bind(id)
            .fetch_one(db)
            .await
        } else {
            sqlx::query_as::<_, Admin>(
                r#"
                UPDATE admins
                SET first_name = $1, last_name = $2, email = $3, phone = $4,
                    updated_at = NOW()
                WHERE id = $5
                RETURNING id, first_name, last_name, email, phone, created_at, updated_at
                "#,
            )
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(phone)
            .bind(id)
            .fetch_one(db)
            .await
        }
        .context("Failed to update admin")
        .map_err(AppError::database)?;

        Ok(updated)
    }
}
