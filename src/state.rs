use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::config::storage::StorageConfig;
use crate::utils::storage::{LocalMediaStorage, MediaStorage};

/// Shared application state, constructed once at startup and injected into
/// every handler. All durable state lives behind the pooled connection; the
/// media store is a trait object so a CDN-backed implementation can replace
/// the local one without touching handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub email_config: EmailConfig,
    pub cors_config: CorsConfig,
    pub media: Arc<dyn MediaStorage>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("email_config", &self.email_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        media: Arc::new(LocalMediaStorage::new(StorageConfig::from_env())),
    }
}
