use serde::Serialize;
use std::collections::BTreeMap;

/// Field name to value map parsed from a PayPal reply or an IPN payload.
pub type Details = BTreeMap<String, String>;

/// Normalized outcome of one confirmation attempt.
///
/// `confirmed` and `details` are always set together; a result is never
/// partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConfirmationResult {
    /// Whether PayPal attests the transaction or notification as genuine.
    pub confirmed: bool,
    /// Parsed fields, ordered by name.
    pub details: Details,
}

impl ConfirmationResult {
    pub fn new(confirmed: bool, details: Details) -> Self {
        Self { confirmed, details }
    }
}
