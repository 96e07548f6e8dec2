//! Test helpers for the Postgres repositories
//!
//! Tests run against the database named by `DATABASE_URL`. Every test works
//! on freshly generated contact ids, so tests do not see each other's rows
//! and no cleanup is needed.

use crate::config::PostgresConfig;
use crate::postgres_repositories::{PassportRepositories, PostgresRepositories};
use sqlx::PgPool;

pub struct TestContext {
    pub repos: PostgresRepositories,
    pub passport_repos: PassportRepositories,
}

impl TestContext {
    pub fn passport_repos(&self) -> &PassportRepositories {
        &self.passport_repos
    }

    pub fn pool(&self) -> &PgPool {
        self.repos.pool()
    }
}

/// Connects, applies the migrations and builds the repositories
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let passport_repo = &ctx.passport_repos().passport_repository;
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let repos = setup_shared_repos().await?;
    let passport_repos = repos.create_passport_repositories();
    Ok(TestContext {
        repos,
        passport_repos,
    })
}

/// Like [`setup_test_context`] but returns the repository source itself,
/// for tests that need several repository handles over one pool.
pub async fn setup_shared_repos() -> Result<PostgresRepositories, Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config = PostgresConfig::from_env()?;
    let repos = PostgresRepositories::connect(&config).await?;

    sqlx::migrate!().run(repos.pool()).await?;

    Ok(repos)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_context() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;

        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(ctx.pool()).await?;
        assert_eq!(one, 1);

        Ok(())
    }
}
