use contact_core_api::{ApiError, ApiResult};
use contact_core_db::models::bounded_text::{char_limit, to_bounded};
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Decodes a row at an operation boundary, where decode failures become
/// [`ApiError::InternalError`].
pub fn decode_row<T: TryFromRow<PgRow>>(row: &PgRow) -> ApiResult<T> {
    T::try_from_row(row).map_err(|e| ApiError::InternalError(e.to_string()))
}

fn too_long<const N: usize>(col_name: &str) -> Box<dyn Error + Send + Sync> {
    format!(
        "Value for column '{col_name}' is too long (max {} chars)",
        char_limit(N)
    )
    .into()
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    to_bounded(&s).ok_or_else(|| too_long::<N>(col_name))
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| to_bounded(&val).ok_or_else(|| too_long::<N>(col_name)))
        .transpose()
}
