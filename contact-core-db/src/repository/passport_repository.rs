use async_trait::async_trait;
use contact_core_api::ApiResult;
use sqlx::Database;
use uuid::Uuid;

use crate::models::passport::{PassportFields, PassportModel, PassportWithContact};
use crate::repository::pagination::{Page, PageRequest};

/// Persistence operations for the passport owned by a contact
///
/// Every operation is keyed by `contact_id`. Write operations take the
/// writable attributes as a [`PassportFields`] bundle and stamp timestamps
/// themselves.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait PassportRepository<DB: Database>: Send + Sync {
    /// Insert a new passport. Both timestamps are set to now.
    ///
    /// # Returns
    /// * `Err(ApiError::AlreadyExists)` - The contact already has a passport
    /// * `Err(ApiError::NotFound)` - The contact does not exist
    async fn create_passport(
        &self,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<PassportModel>;

    /// Insert the passport, or overwrite it when the contact already has one.
    ///
    /// Runs in a single SERIALIZABLE transaction so that concurrent calls for
    /// the same contact leave exactly one row behind. `created_at` of an
    /// existing row is kept; `updated_at` is refreshed.
    ///
    /// # Returns
    /// * `Err(ApiError::Conflict)` - Serialization kept failing after retries
    async fn create_or_update_passport(
        &self,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<PassportModel>;

    /// All passports, each joined with its contact
    async fn read_passports(&self) -> ApiResult<Vec<PassportWithContact>>;

    /// One page of passports joined with their contacts, ordered by contact
    async fn read_passports_page(
        &self,
        page: PageRequest,
    ) -> ApiResult<Page<PassportWithContact>>;

    /// The passport of a contact joined with the contact
    ///
    /// # Returns
    /// * `Ok(None)` - The contact has no passport
    async fn read_passport(&self, contact_id: Uuid) -> ApiResult<Option<PassportWithContact>>;

    /// Overwrite the passport of a contact and refresh `updated_at`.
    ///
    /// # Returns
    /// * `Ok(None)` - No passport exists for the contact; nothing is created
    async fn update_passport(
        &self,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<Option<PassportModel>>;

    /// Remove the passport of a contact
    ///
    /// # Returns
    /// * `Ok(usize)` - Rows removed, 0 when there was none
    async fn delete_passport(&self, contact_id: Uuid) -> ApiResult<usize>;
}
