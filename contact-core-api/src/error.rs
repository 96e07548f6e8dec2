use thiserror::Error;

/// SQLSTATE raised by Postgres when a SERIALIZABLE transaction cannot commit.
pub const SERIALIZATION_FAILURE: &str = "40001";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    /// True for errors a caller may resolve by retrying the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => ApiError::NotFound(error.to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    ApiError::AlreadyExists(db_err.message().to_string())
                } else if db_err.is_foreign_key_violation() {
                    ApiError::NotFound(db_err.message().to_string())
                } else if db_err.code().as_deref() == Some(SERIALIZATION_FAILURE) {
                    ApiError::Conflict(db_err.message().to_string())
                } else {
                    ApiError::DatabaseError(error.to_string())
                }
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                ApiError::InternalError(error.to_string())
            }
            _ => ApiError::DatabaseError(error.to_string()),
        }
    }
}
