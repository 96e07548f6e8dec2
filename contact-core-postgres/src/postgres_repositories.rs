use sqlx::PgPool;
use std::sync::Arc;

use crate::config::PostgresConfig;
use crate::repository::contact::ContactRepositoryImpl;
use crate::repository::passport::PassportRepositoryImpl;

/// Owns the shared pool and hands out repositories built on it
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    serialization_retries: u32,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            serialization_retries: PostgresConfig::default().serialization_retries,
        }
    }

    /// Connects with `config` and keeps its retry setting for the repositories
    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        let pool = config.connect().await?;
        Ok(Self {
            pool: Arc::new(pool),
            serialization_retries: config.serialization_retries,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn create_passport_repositories(&self) -> PassportRepositories {
        PassportRepositories {
            passport_repository: Arc::new(
                PassportRepositoryImpl::new(self.pool.clone())
                    .with_serialization_retries(self.serialization_retries),
            ),
            contact_repository: Arc::new(ContactRepositoryImpl::new(self.pool.clone())),
        }
    }
}

/// Container for the passport repository and the contact repository it joins
pub struct PassportRepositories {
    pub passport_repository: Arc<PassportRepositoryImpl>,
    pub contact_repository: Arc<ContactRepositoryImpl>,
}
