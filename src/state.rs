use std::sync::Arc;

use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::directory::{PgSubjectDirectory, SubjectDirectory};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub directory: Arc<dyn SubjectDirectory>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;

    AppState {
        directory: Arc::new(PgSubjectDirectory::new(db.clone())),
        db,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
