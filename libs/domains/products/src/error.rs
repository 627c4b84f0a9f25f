use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    /// A business rule rejected the operation; the message is shown to the caller as-is
    #[error("{0}")]
    BusinessRule(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        ProductError::Validation(errors.to_string())
    }
}
