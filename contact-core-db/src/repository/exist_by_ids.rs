use async_trait::async_trait;
use contact_core_api::ApiResult;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for checking whether entities exist
///
/// For one-to-one entities keyed by their owner (a passport keyed by its
/// contact) the ids are the owner ids.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl ExistByIds<Postgres> for PassportRepositoryImpl {
///     async fn exist_by_ids(&self, contact_ids: &[Uuid]) -> ApiResult<Vec<(Uuid, bool)>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ExistByIds<DB: Database>: Send + Sync {
    /// Check existence of multiple entities by their unique identifiers
    ///
    /// # Returns
    /// * `Ok(Vec<(Uuid, bool)>)` - Each requested id with its existence status, in request order
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_ids(&self, ids: &[Uuid]) -> ApiResult<Vec<(Uuid, bool)>>;
}
