//! Lookup capabilities for the three principal partitions.
//!
//! The access-control pipeline resolves a token's subject against exactly
//! one of three disjoint stores (admins, faculty, students), selected by
//! the role tag carried in the claims. [`SubjectDirectory`] is that seam:
//! the pipeline consumes it, [`PgSubjectDirectory`] backs it with Postgres,
//! and tests substitute an in-memory implementation.
//!
//! Lookups are always fresh point queries. Nothing is cached, so a deleted
//! account or changed role takes effect on the very next request.

use std::fmt;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::admins::model::Admin;
use crate::modules::faculty::model::Faculty;
use crate::modules::students::model::Student;

/// Point lookups by id, one per principal partition.
///
/// `Ok(None)` means the partition has no such record (the account was
/// deleted after the token was issued); `Err` means the store itself
/// failed and must surface as a server-side error, never as 401.
#[async_trait]
pub trait SubjectDirectory: fmt::Debug + Send + Sync {
    async fn find_admin(&self, id: Uuid) -> anyhow::Result<Option<Admin>>;
    async fn find_faculty(&self, id: Uuid) -> anyhow::Result<Option<Faculty>>;
    async fn find_student(&self, id: Uuid) -> anyhow::Result<Option<Student>>;
}

#[derive(Debug, Clone)]
pub struct PgSubjectDirectory {
    pool: PgPool,
}

impl PgSubjectDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectDirectory for PgSubjectDirectory {
    async fn find_admin(&self, id: Uuid) -> anyhow::Result<Option<Admin>> {
        sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, first_name, last_name, email, phone, created_at, updated_at
            FROM admins
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up admin record")
    }

    async fn find_faculty(&self, id: Uuid) -> anyhow::Result<Option<Faculty>> {
        sqlx::query_as::<_, Faculty>(
            r#"
            SELECT id, first_name, last_name, email, phone, department, designation,
                   created_at, updated_at
            FROM faculty
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up faculty record")
    }

    async fn find_student(&self, id: Uuid) -> anyhow::Result<Option<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, phone, created_at, updated_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up student record")
    }
}
