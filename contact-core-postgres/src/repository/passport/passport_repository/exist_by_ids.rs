use async_trait::async_trait;
use contact_core_api::ApiResult;
use contact_core_db::repository::exist_by_ids::ExistByIds;
use sqlx::Postgres;
use std::collections::HashSet;
use uuid::Uuid;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    pub(super) async fn exist_by_ids_impl(
        repo: &PassportRepositoryImpl,
        contact_ids: &[Uuid],
    ) -> ApiResult<Vec<(Uuid, bool)>> {
        if contact_ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: HashSet<Uuid> = sqlx::query_scalar(
            "SELECT contact_id FROM passports WHERE contact_id = ANY($1)",
        )
        .bind(contact_ids)
        .fetch_all(repo.pool.as_ref())
        .await?
        .into_iter()
        .collect();

        Ok(contact_ids
            .iter()
            .map(|id| (*id, existing.contains(id)))
            .collect())
    }
}

#[async_trait]
impl ExistByIds<Postgres> for PassportRepositoryImpl {
    async fn exist_by_ids(&self, contact_ids: &[Uuid]) -> ApiResult<Vec<(Uuid, bool)>> {
        Self::exist_by_ids_impl(self, contact_ids).await
    }
}
