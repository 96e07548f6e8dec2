use contact_core_api::{ApiError, ApiResult};
use contact_core_db::models::contact::ContactModel;
use crate::utils::decode_row;
use uuid::Uuid;

use super::repo_impl::ContactRepositoryImpl;

impl ContactRepositoryImpl {
    /// Loads a contact, failing with `NotFound` when it does not exist
    pub async fn load(&self, id: Uuid) -> ApiResult<ContactModel> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("contact {id}")))?;

        decode_row(&row)
    }
}
