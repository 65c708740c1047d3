use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Timestamp error: {0}")]
    InvalidFormat(String),
    #[error("Timestamp error: {0}")]
    Decimal(#[from] rust_decimal::Error),
    #[error("Timestamp error: [{0}] is out of range")]
    OutOfRange(String)
}
