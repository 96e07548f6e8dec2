use contact_core_api::ApiResult;
use contact_core_db::models::passport::PassportWithContact;
use contact_core_db::repository::pagination::{Page, PageRequest};
use crate::utils::decode_row;

use super::repo_impl::{PassportRepositoryImpl, SELECT_PASSPORT_WITH_CONTACT};

impl PassportRepositoryImpl {
    pub(super) async fn read_passports_impl(
        repo: &PassportRepositoryImpl,
    ) -> ApiResult<Vec<PassportWithContact>> {
        let query = format!("{SELECT_PASSPORT_WITH_CONTACT} ORDER BY p.contact_id");
        let rows = sqlx::query(&query).fetch_all(repo.pool.as_ref()).await?;

        rows.iter().map(decode_row).collect()
    }

    pub(super) async fn read_passports_page_impl(
        repo: &PassportRepositoryImpl,
        page: PageRequest,
    ) -> ApiResult<Page<PassportWithContact>> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM passports p
            INNER JOIN contacts c ON c.id = p.contact_id
            "#,
        )
        .fetch_one(repo.pool.as_ref())
        .await?;

        let query = format!("{SELECT_PASSPORT_WITH_CONTACT} ORDER BY p.contact_id LIMIT $1 OFFSET $2");
        let rows = sqlx::query(&query)
            .bind(page.sql_limit())
            .bind(page.sql_offset())
            .fetch_all(repo.pool.as_ref())
            .await?;

        let items = rows
            .iter()
            .map(decode_row)
            .collect::<ApiResult<Vec<PassportWithContact>>>()?;

        Ok(Page::new(items, total.max(0) as usize, page.limit, page.offset))
    }
}
