use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A single outbound POST, fully built by the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Status and body text of a reply. Owned by the orchestrator that sent the
/// request and dropped once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues POST requests on behalf of the orchestrators.
///
/// Implementations report connection-level failures as
/// [`ConfirmError::RequestError`](crate::error::ConfirmError::RequestError)
/// carrying the underlying message. Status codes are returned as-is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: OutboundRequest) -> Result<RawResponse>;
}

pub type TransportRef = Arc<dyn Transport>;
