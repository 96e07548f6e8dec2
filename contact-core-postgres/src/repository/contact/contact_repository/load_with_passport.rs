use contact_core_api::{ApiError, ApiResult};
use contact_core_db::models::{contact::ContactModel, passport::PassportModel};
use crate::utils::decode_row;
use sqlx::Row;
use uuid::Uuid;

use super::repo_impl::{read_contact, ContactRepositoryImpl};

impl ContactRepositoryImpl {
    /// Navigates the association from the contact side.
    ///
    /// # Returns
    /// * `Ok(None)` - The contact does not exist
    /// * `Ok(Some((contact, None)))` - The contact has no passport
    pub async fn load_with_passport(
        &self,
        id: Uuid,
    ) -> ApiResult<Option<(ContactModel, Option<PassportModel>)>> {
        let row = sqlx::query(
            r#"
            SELECT c.id AS c_id, c.first_name AS c_first_name, c.last_name AS c_last_name,
                   c.email AS c_email, c.created_at AS c_created_at, c.updated_at AS c_updated_at,
                   p.contact_id, p.passport_number, p.surname, p.given_names, p.sex,
                   p.date_of_birth, p.place_of_birth, p.nationality, p.date_of_issue,
                   p.date_of_expiration, p."type", p.issuing_country, p.authority, p.photo,
                   p.created_at, p.updated_at
            FROM contacts c
            LEFT JOIN passports p ON p.contact_id = c.id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let contact = read_contact(&row, "c_").map_err(|e| ApiError::InternalError(e.to_string()))?;
        let has_passport = row.try_get::<Option<Uuid>, _>("contact_id")?.is_some();
        let passport = if has_passport {
            Some(decode_row::<PassportModel>(&row)?)
        } else {
            None
        };

        Ok(Some((contact, passport)))
    }
}
