use async_trait::async_trait;
use contact_core_api::ApiResult;
use contact_core_db::models::passport::{PassportFields, PassportModel, PassportWithContact};
use contact_core_db::repository::pagination::{Page, PageRequest};
use contact_core_db::repository::passport_repository::PassportRepository;
use crate::repository::contact::contact_repository::repo_impl::read_contact;
use crate::utils::{get_optional_heapless_string, TryFromRow};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Passport columns joined with the owning contact; contact columns carry
/// the `c_` prefix.
pub(super) const SELECT_PASSPORT_WITH_CONTACT: &str = r#"
    SELECT p.contact_id, p.passport_number, p.surname, p.given_names, p.sex,
           p.date_of_birth, p.place_of_birth, p.nationality, p.date_of_issue,
           p.date_of_expiration, p."type", p.issuing_country, p.authority, p.photo,
           p.created_at, p.updated_at,
           c.id AS c_id, c.first_name AS c_first_name, c.last_name AS c_last_name,
           c.email AS c_email, c.created_at AS c_created_at, c.updated_at AS c_updated_at
    FROM passports p
    INNER JOIN contacts c ON c.id = p.contact_id
"#;

pub struct PassportRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
    pub(crate) serialization_retries: u32,
}

impl PassportRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            serialization_retries: 3,
        }
    }

    /// Extra attempts `create_or_update_passport` makes after a
    /// serialization failure.
    pub fn with_serialization_retries(mut self, retries: u32) -> Self {
        self.serialization_retries = retries;
        self
    }
}

/// Binds the writable passport fields as the next thirteen parameters,
/// in column order.
pub(super) fn bind_fields<'q>(
    query: Query<'q, Postgres, PgArguments>,
    fields: &'q PassportFields,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(fields.passport_number.as_deref())
        .bind(fields.surname.as_deref())
        .bind(fields.given_names.as_deref())
        .bind(fields.sex.as_deref())
        .bind(fields.date_of_birth.as_deref())
        .bind(fields.place_of_birth.as_deref())
        .bind(fields.nationality.as_deref())
        .bind(fields.date_of_issue.as_deref())
        .bind(fields.date_of_expiration.as_deref())
        .bind(fields.passport_type.as_deref())
        .bind(fields.issuing_country.as_deref())
        .bind(fields.authority.as_deref())
        .bind(fields.photo.as_deref())
}

impl TryFromRow<PgRow> for PassportModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PassportModel {
            contact_id: row.try_get("contact_id")?,
            fields: PassportFields {
                passport_number: get_optional_heapless_string(row, "passport_number")?,
                surname: get_optional_heapless_string(row, "surname")?,
                given_names: get_optional_heapless_string(row, "given_names")?,
                sex: get_optional_heapless_string(row, "sex")?,
                date_of_birth: get_optional_heapless_string(row, "date_of_birth")?,
                place_of_birth: get_optional_heapless_string(row, "place_of_birth")?,
                nationality: get_optional_heapless_string(row, "nationality")?,
                date_of_issue: get_optional_heapless_string(row, "date_of_issue")?,
                date_of_expiration: get_optional_heapless_string(row, "date_of_expiration")?,
                passport_type: get_optional_heapless_string(row, "type")?,
                issuing_country: get_optional_heapless_string(row, "issuing_country")?,
                authority: get_optional_heapless_string(row, "authority")?,
                photo: row.try_get("photo")?,
            },
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFromRow<PgRow> for PassportWithContact {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PassportWithContact {
            passport: PassportModel::try_from_row(row)?,
            contact: read_contact(row, "c_")?,
        })
    }
}

#[async_trait]
impl PassportRepository<Postgres> for PassportRepositoryImpl {
    #[instrument(skip(self, fields))]
    async fn create_passport(
        &self,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<PassportModel> {
        let passport = Self::create_passport_impl(self, contact_id, fields)
            .await
            .inspect_err(|e| error!(error = %e, "Error saving passport"))?;
        info!("Passport saved");
        Ok(passport)
    }

    #[instrument(skip(self, fields))]
    async fn create_or_update_passport(
        &self,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<PassportModel> {
        let passport = Self::create_or_update_passport_impl(self, contact_id, fields)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating or updating passport"))?;
        info!("Passport created or updated");
        Ok(passport)
    }

    #[instrument(skip(self))]
    async fn read_passports(&self) -> ApiResult<Vec<PassportWithContact>> {
        Self::read_passports_impl(self)
            .await
            .inspect_err(|e| error!(error = %e, "Could not read passports"))
    }

    #[instrument(skip(self))]
    async fn read_passports_page(
        &self,
        page: PageRequest,
    ) -> ApiResult<Page<PassportWithContact>> {
        Self::read_passports_page_impl(self, page)
            .await
            .inspect_err(|e| error!(error = %e, "Could not read passport page"))
    }

    #[instrument(skip(self))]
    async fn read_passport(&self, contact_id: Uuid) -> ApiResult<Option<PassportWithContact>> {
        Self::read_passport_impl(self, contact_id)
            .await
            .inspect_err(|e| error!(error = %e, "Could not read passport"))
    }

    #[instrument(skip(self, fields))]
    async fn update_passport(
        &self,
        contact_id: Uuid,
        fields: PassportFields,
    ) -> ApiResult<Option<PassportModel>> {
        let updated = Self::update_passport_impl(self, contact_id, fields)
            .await
            .inspect_err(|e| error!(error = %e, "Error updating passport"))?;
        info!(matched = updated.is_some(), "Passport update finished");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_passport(&self, contact_id: Uuid) -> ApiResult<usize> {
        let deleted = Self::delete_passport_impl(self, contact_id)
            .await
            .inspect_err(|e| error!(error = %e, "Error deleting passport"))?;
        info!(deleted, "Passport delete finished");
        Ok(deleted)
    }
}
