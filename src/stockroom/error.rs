use thiserror::Error;

/// Out-of-range values rejected by the product setters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    #[error("price must be greater than zero (got {0})")]
    NonPositivePrice(f64),
}

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Invalid value: {0}")]
    Validation(#[from] ValidationError),

    #[error("Product ID already exists: {0}")]
    DuplicateId(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Malformed record ({context}): {reason}")]
    Format { context: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StockError {
    pub fn format(context: impl Into<String>, reason: impl Into<String>) -> Self {
        StockError::Format {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
