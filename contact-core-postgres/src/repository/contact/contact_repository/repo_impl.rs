use contact_core_db::models::contact::ContactModel;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

pub struct ContactRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ContactRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Reads a contact whose columns carry `prefix`, as produced by the
/// passport joins (`c.first_name AS c_first_name`).
pub(crate) fn read_contact(
    row: &PgRow,
    prefix: &str,
) -> Result<ContactModel, Box<dyn Error + Send + Sync>> {
    Ok(ContactModel {
        id: row.try_get(format!("{prefix}id").as_str())?,
        first_name: get_heapless_string(row, &format!("{prefix}first_name"))?,
        last_name: get_heapless_string(row, &format!("{prefix}last_name"))?,
        email: get_optional_heapless_string(row, &format!("{prefix}email"))?,
        created_at: row.try_get(format!("{prefix}created_at").as_str())?,
        updated_at: row.try_get(format!("{prefix}updated_at").as_str())?,
    })
}

impl TryFromRow<PgRow> for ContactModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        read_contact(row, "")
    }
}
