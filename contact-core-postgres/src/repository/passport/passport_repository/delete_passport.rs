use contact_core_api::ApiResult;
use uuid::Uuid;

use super::repo_impl::PassportRepositoryImpl;

impl PassportRepositoryImpl {
    pub(super) async fn delete_passport_impl(
        repo: &PassportRepositoryImpl,
        contact_id: Uuid,
    ) -> ApiResult<usize> {
        let result = sqlx::query("DELETE FROM passports WHERE contact_id = $1")
            .bind(contact_id)
            .execute(repo.pool.as_ref())
            .await?;

        Ok(result.rows_affected() as usize)
    }
}
