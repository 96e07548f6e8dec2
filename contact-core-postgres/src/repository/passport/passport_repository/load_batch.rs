use async_trait::async_trait;
use contact_core_api::ApiResult;
use contact_core_db::models::passport::PassportModel;
use contact_core_db::repository::load_batch::LoadBatch;
use crate::utils::decode_row;
use sqlx::Postgres;
use std::collections::HashMap;
use uuid::Uuid;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &PassportRepositoryImpl,
        contact_ids: &[Uuid],
    ) -> ApiResult<Vec<Option<PassportModel>>> {
        if contact_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT contact_id, passport_number, surname, given_names, sex, date_of_birth, place_of_birth, nationality, date_of_issue, date_of_expiration, "type", issuing_country, authority, photo, created_at, updated_at
            FROM passports
            WHERE contact_id = ANY($1)
            "#,
        )
        .bind(contact_ids)
        .fetch_all(repo.pool.as_ref())
        .await?;

        let mut item_map = HashMap::new();
        for row in rows {
            let item: PassportModel = decode_row(&row)?;
            item_map.insert(item.contact_id, item);
        }

        Ok(contact_ids.iter().map(|id| item_map.remove(id)).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, PassportModel> for PassportRepositoryImpl {
    async fn load_batch(&self, contact_ids: &[Uuid]) -> ApiResult<Vec<Option<PassportModel>>> {
        Self::load_batch_impl(self, contact_ids).await
    }
}
