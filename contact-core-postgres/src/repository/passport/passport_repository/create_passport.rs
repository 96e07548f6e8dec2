use chrono::Utc;
use contact_core_api::ApiResult;
use contact_core_db::models::passport::{PassportFields, PassportModel};
use crate::utils::decode_row;
use uuid::Uuid;

use super::repo_impl::{bind_fields, PassportRepositoryImpl};

impl PassportRepositoryImpl {
    pub(super) async fn create_passport_impl(
        repo: &PassportRepositoryImpl,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<PassportModel> {
        let now = Utc::now();

        let query = sqlx::query(
            r#"
            INSERT INTO passports
            (contact_id, passport_number, surname, given_names, sex, date_of_birth, place_of_birth, nationality, date_of_issue, date_of_expiration, "type", issuing_country, authority, photo, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING contact_id, passport_number, surname, given_names, sex, date_of_birth, place_of_birth, nationality, date_of_issue, date_of_expiration, "type", issuing_country, authority, photo, created_at, updated_at
            "#,
        )
        .bind(contact_id);

        let row = bind_fields(query, &fields)
            .bind(now)
            .bind(now)
            .fetch_one(repo.pool.as_ref())
            .await?;

        decode_row(&row)
    }
}
