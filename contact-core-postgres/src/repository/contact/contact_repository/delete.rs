use contact_core_api::ApiResult;
use tracing::info;
use uuid::Uuid;

use super::repo_impl::ContactRepositoryImpl;

impl ContactRepositoryImpl {
    /// Deletes a contact; its passport goes with it (`ON DELETE CASCADE`)
    pub async fn delete(&self, id: Uuid) -> ApiResult<usize> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        let deleted = result.rows_affected() as usize;
        info!(contact_id = %id, deleted, "Contact deleted");
        Ok(deleted)
    }
}
