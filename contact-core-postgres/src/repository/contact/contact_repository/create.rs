use contact_core_api::ApiResult;
use contact_core_db::models::contact::ContactModel;
use crate::utils::decode_row;
use tracing::{error, info};

use super::repo_impl::ContactRepositoryImpl;

impl ContactRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ContactRepositoryImpl,
        contact: &ContactModel,
    ) -> ApiResult<ContactModel> {
        let row = sqlx::query(
            r#"
            INSERT INTO contacts (id, first_name, last_name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, created_at, updated_at
            "#,
        )
        .bind(contact.id)
        .bind(contact.first_name.as_str())
        .bind(contact.last_name.as_str())
        .bind(contact.email.as_deref())
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .fetch_one(repo.pool.as_ref())
        .await?;

        decode_row(&row)
    }

    pub async fn create(&self, contact: &ContactModel) -> ApiResult<ContactModel> {
        let result = Self::create_impl(self, contact).await;
        match &result {
            Ok(_) => info!(contact_id = %contact.id, "Contact saved"),
            Err(e) => error!(contact_id = %contact.id, error = %e, "Error saving contact"),
        }
        result
    }
}
