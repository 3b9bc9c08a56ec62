use crate::domain::ports::{OutboundRequest, RawResponse, Transport};
use crate::error::{ConfirmError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// A scripted transport that never touches the network.
///
/// Replies are handed out in the order they were scripted and every request
/// is recorded. Ideal for testing or for replaying captured PayPal replies.
/// Share it behind an `Arc` to inspect requests after handing it out.
#[derive(Default)]
pub struct InMemoryTransport {
    script: Mutex<VecDeque<Result<RawResponse>>>,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl InMemoryTransport {
    /// Creates a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply with the given status and body.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(RawResponse::new(status, body)))
    }

    /// Queues a transport failure carrying `message`.
    pub fn fail(self, message: impl Into<String>) -> Self {
        self.push(Err(ConfirmError::RequestError(message.into())))
    }

    fn push(mut self, outcome: Result<RawResponse>) -> Self {
        self.script.get_mut().push_back(outcome);
        self
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn post(&self, request: OutboundRequest) -> Result<RawResponse> {
        self.requests.lock().await.push(request);
        self.script.lock().await.pop_front().unwrap_or_else(|| {
            Err(ConfirmError::RequestError(
                "no scripted response left".to_string(),
            ))
        })
    }
}
