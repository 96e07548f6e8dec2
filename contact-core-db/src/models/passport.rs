use chrono::{DateTime, Utc};
use contact_core_api::{ApiError, ApiResult, PassportRequest};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::bounded_text::{char_limit, to_bounded, utf8_capacity};
use crate::models::contact::ContactModel;
use crate::models::identifiable::Identifiable;
use crate::utils::hash_as_i64;

/// # Documentation
/// The writable attributes of a passport, in storage column order.
///
/// All attributes are free text; nothing is parsed or normalized. The
/// dates in particular are kept exactly as they were captured. Bounds are
/// in characters, matching the `VARCHAR(n)` columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportFields {
    pub passport_number: Option<HeaplessString<{ utf8_capacity(50) }>>,
    pub surname: Option<HeaplessString<{ utf8_capacity(100) }>>,
    pub given_names: Option<HeaplessString<{ utf8_capacity(200) }>>,
    pub sex: Option<HeaplessString<{ utf8_capacity(20) }>>,
    pub date_of_birth: Option<HeaplessString<{ utf8_capacity(50) }>>,
    pub place_of_birth: Option<HeaplessString<{ utf8_capacity(100) }>>,
    pub nationality: Option<HeaplessString<{ utf8_capacity(100) }>>,
    pub date_of_issue: Option<HeaplessString<{ utf8_capacity(50) }>>,
    pub date_of_expiration: Option<HeaplessString<{ utf8_capacity(50) }>>,

    /// Stored in the `type` column
    #[serde(rename = "type")]
    pub passport_type: Option<HeaplessString<{ utf8_capacity(20) }>>,

    pub issuing_country: Option<HeaplessString<{ utf8_capacity(100) }>>,
    pub authority: Option<HeaplessString<{ utf8_capacity(200) }>>,
    pub photo: Option<Vec<u8>>,
}

impl PassportFields {
    /// Stable hash of the field contents, independent of timestamps.
    pub fn content_hash(&self) -> ApiResult<i64> {
        hash_as_i64(self).map_err(ApiError::InternalError)
    }
}

fn bounded<const N: usize>(
    field: &str,
    value: &Option<String>,
) -> ApiResult<Option<HeaplessString<N>>> {
    value
        .as_deref()
        .map(|s| {
            to_bounded::<N>(s).ok_or_else(|| {
                ApiError::ValidationError(format!(
                    "{field} is too long (max {} chars)",
                    char_limit(N)
                ))
            })
        })
        .transpose()
}

impl TryFrom<&PassportRequest> for PassportFields {
    type Error = ApiError;

    fn try_from(request: &PassportRequest) -> ApiResult<Self> {
        Ok(PassportFields {
            passport_number: bounded("passport_number", &request.passport_number)?,
            surname: bounded("surname", &request.surname)?,
            given_names: bounded("given_names", &request.given_names)?,
            sex: bounded("sex", &request.sex)?,
            date_of_birth: bounded("date_of_birth", &request.date_of_birth)?,
            place_of_birth: bounded("place_of_birth", &request.place_of_birth)?,
            nationality: bounded("nationality", &request.nationality)?,
            date_of_issue: bounded("date_of_issue", &request.date_of_issue)?,
            date_of_expiration: bounded("date_of_expiration", &request.date_of_expiration)?,
            passport_type: bounded("type", &request.passport_type)?,
            issuing_country: bounded("issuing_country", &request.issuing_country)?,
            authority: bounded("authority", &request.authority)?,
            photo: request.photo.clone(),
        })
    }
}

/// # Documentation
/// Database model for a contact's passport.
///
/// One row per contact: `contact_id` is both the primary key and the
/// foreign key to `contacts`, so a contact owns at most one passport.
/// `created_at` and `updated_at` are set by the repository, never by
/// column defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportModel {
    pub contact_id: Uuid,

    #[serde(flatten)]
    pub fields: PassportFields,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PassportModel {
    /// A fresh passport whose timestamps are both `now`.
    pub fn new(contact_id: Uuid, fields: PassportFields, now: DateTime<Utc>) -> Self {
        Self {
            contact_id,
            fields,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for PassportModel {
    fn get_id(&self) -> Uuid {
        self.contact_id
    }
}

/// A passport together with the contact that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassportWithContact {
    pub passport: PassportModel,
    pub contact: ContactModel,
}
