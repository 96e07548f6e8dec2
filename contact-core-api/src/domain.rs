use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiResult;

/// # Documentation
/// Caller-facing passport payload.
///
/// Every attribute is optional free text; the length bounds are the column
/// bounds of the persistence model and are checked before anything reaches
/// the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PassportRequest {
    pub contact_id: Uuid,

    #[validate(length(max = 50))]
    pub passport_number: Option<String>,

    #[validate(length(max = 100))]
    pub surname: Option<String>,

    #[validate(length(max = 200))]
    pub given_names: Option<String>,

    #[validate(length(max = 20))]
    pub sex: Option<String>,

    #[validate(length(max = 50))]
    pub date_of_birth: Option<String>,

    #[validate(length(max = 100))]
    pub place_of_birth: Option<String>,

    #[validate(length(max = 100))]
    pub nationality: Option<String>,

    #[validate(length(max = 50))]
    pub date_of_issue: Option<String>,

    #[validate(length(max = 50))]
    pub date_of_expiration: Option<String>,

    /// Serialized as `type` to match the storage column
    #[serde(rename = "type")]
    #[validate(length(max = 20))]
    pub passport_type: Option<String>,

    #[validate(length(max = 100))]
    pub issuing_country: Option<String>,

    #[validate(length(max = 200))]
    pub authority: Option<String>,

    /// Raw image bytes
    pub photo: Option<Vec<u8>>,
}

impl PassportRequest {
    /// Runs the field validation and returns the request on success.
    pub fn validated(self) -> ApiResult<Self> {
        self.validate()?;
        Ok(self)
    }
}
