use thiserror::Error;

/// Failures surfaced by a confirmation attempt.
///
/// `InvalidData` means the input was rejected before any network call and
/// retrying with the same input is pointless. `RequestError` covers transport
/// failures and non-200 replies from PayPal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfirmError {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Request error: {0}")]
    RequestError(String),
}

pub type Result<T> = std::result::Result<T, ConfirmError>;
