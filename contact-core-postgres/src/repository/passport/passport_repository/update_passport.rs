use chrono::Utc;
use contact_core_api::ApiResult;
use contact_core_db::models::passport::{PassportFields, PassportModel};
use crate::utils::decode_row;
use uuid::Uuid;

use super::repo_impl::{bind_fields, PassportRepositoryImpl};

impl PassportRepositoryImpl {
    pub(super) async fn update_passport_impl(
        repo: &PassportRepositoryImpl,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<Option<PassportModel>> {
        let query = sqlx::query(
            r#"
            UPDATE passports SET
                passport_number = $2,
                surname = $3,
                given_names = $4,
                sex = $5,
                date_of_birth = $6,
                place_of_birth = $7,
                nationality = $8,
                date_of_issue = $9,
                date_of_expiration = $10,
                "type" = $11,
                issuing_country = $12,
                authority = $13,
                photo = $14,
                created_at = $15,
                updated_at = $15
            WHERE contact_id = $1
            RETURNING contact_id, passport_number, surname, given_names, sex, date_of_birth, place_of_birth, nationality, date_of_issue, date_of_expiration, "type", issuing_country, authority, photo, created_at, updated_at
            "#,
        )
        .bind(contact_id);

        let row = bind_fields(query, &fields)
            .bind(Utc::now())
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(decode_row).transpose()
    }
}
