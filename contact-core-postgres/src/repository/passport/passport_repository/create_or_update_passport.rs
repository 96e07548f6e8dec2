use chrono::Utc;
use contact_core_api::{ApiError, ApiResult};
use contact_core_db::models::passport::{PassportFields, PassportModel};
use crate::utils::decode_row;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use super::repo_impl::{bind_fields, PassportRepositoryImpl};

impl PassportRepositoryImpl {
    pub(super) async fn create_or_update_passport_impl(
        repo: &PassportRepositoryImpl,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<PassportModel> {
        let mut attempt = 0;
        loop {
            match Self::create_or_update_once(repo, contact_id, &fields).await {
                Err(ApiError::Conflict(reason)) if attempt < repo.serialization_retries => {
                    attempt += 1;
                    warn!(attempt, %reason, "Serialization failure, retrying passport save");
                    tokio::time::sleep(Duration::from_millis(10 << attempt.min(6))).await;
                }
                Err(ApiError::Conflict(reason)) => {
                    return Err(ApiError::Conflict(format!(
                        "passport for contact {contact_id} still conflicting after {} attempts: {reason}",
                        attempt + 1
                    )));
                }
                result => return result,
            }
        }
    }

    /// One SERIALIZABLE attempt: look the row up, then upsert or update it.
    /// Both timestamps are set to the time of the write.
    async fn create_or_update_once(
        repo: &PassportRepositoryImpl,
        contact_id: Uuid,
        fields: &PassportFields,
    ) -> ApiResult<PassportModel> {
        let mut tx = repo.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        let existing = sqlx::query(
            r#"
            SELECT contact_id, passport_number, surname, given_names, sex, date_of_birth, place_of_birth, nationality, date_of_issue, date_of_expiration, "type", issuing_country, authority, photo, created_at, updated_at
            FROM passports
            WHERE contact_id = $1
            "#,
        )
        .bind(contact_id)
        .fetch_optional(&mut *tx)
        .await?;

        let now = Utc::now();
        let row = match existing {
            None => {
                debug!("Creating passport");
                let query = sqlx::query(
                    r#"
                    INSERT INTO passports
                    (contact_id, passport_number, surname, given_names, sex, date_of_birth, place_of_birth, nationality, date_of_issue, date_of_expiration, "type", issuing_country, authority, photo, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                    ON CONFLICT (contact_id) DO UPDATE SET
                        passport_number = EXCLUDED.passport_number,
                        surname = EXCLUDED.surname,
                        given_names = EXCLUDED.given_names,
                        sex = EXCLUDED.sex,
                        date_of_birth = EXCLUDED.date_of_birth,
                        place_of_birth = EXCLUDED.place_of_birth,
                        nationality = EXCLUDED.nationality,
                        date_of_issue = EXCLUDED.date_of_issue,
                        date_of_expiration = EXCLUDED.date_of_expiration,
                        "type" = EXCLUDED."type",
                        issuing_country = EXCLUDED.issuing_country,
                        authority = EXCLUDED.authority,
                        photo = EXCLUDED.photo,
                        created_at = EXCLUDED.created_at,
                        updated_at = EXCLUDED.updated_at
                    RETURNING contact_id, passport_number, surname, given_names, sex, date_of_birth, place_of_birth, nationality, date_of_issue, date_of_expiration, "type", issuing_country, authority, photo, created_at, updated_at
                    "#,
                )
                .bind(contact_id);

                bind_fields(query, fields)
                    .bind(now)
                    .bind(now)
                    .fetch_one(&mut *tx)
                    .await?
            }
            Some(current) => {
                let current = decode_row::<PassportModel>(&current)?;
                match (current.fields.content_hash(), fields.content_hash()) {
                    (Ok(stored), Ok(incoming)) if stored == incoming => {
                        debug!("Passport content unchanged, refreshing timestamps only")
                    }
                    (Ok(_), Ok(_)) => debug!("Updating passport"),
                    (Err(e), _) | (_, Err(e)) => {
                        warn!(error = %e, "Could not hash passport content, updating anyway")
                    }
                }

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

                bind_fields(query, fields)
                    .bind(now)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        let passport = decode_row(&row)?;
        tx.commit().await?;
        Ok(passport)
    }
}
