use crate::config::ClientConfig;
use crate::domain::parser;
use crate::domain::ports::{OutboundRequest, RawResponse, TransportRef};
use crate::domain::request::{LookupRequest, NotificationRequest};
use crate::domain::response::ConfirmationResult;
use crate::error::{ConfirmError, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Progress of a single confirmation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Validated, nothing sent yet.
    #[default]
    Created,
    /// PayPal answered with 200; the reply is waiting to be parsed.
    Sent,
    /// The reply has been parsed into a result.
    Processed,
}

/// A confirmation protocol that can be sent and then processed.
///
/// `process` before a successful `send` is a no-op and leaves the result at
/// its defaults (unconfirmed, no details).
#[async_trait]
pub trait Confirmation: Send + Sync {
    /// Dispatches the request. Fails with `RequestError` on a transport
    /// failure or a non-200 status; the attempt then stays `Created`.
    async fn send(&mut self) -> Result<()>;

    /// Parses the reply received by `send`.
    fn process(&mut self);

    fn stage(&self) -> Stage;

    /// The reply held between `send` and `process`.
    fn response(&self) -> Option<&RawResponse>;

    fn result(&self) -> ConfirmationResult;
}

/// State shared by both protocols: one transport call, one reply, one result.
struct Attempt {
    transport: TransportRef,
    endpoint: String,
    stage: Stage,
    response: Option<RawResponse>,
    result: ConfirmationResult,
}

impl Attempt {
    fn new(transport: TransportRef, endpoint: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_string(),
            stage: Stage::Created,
            response: None,
            result: ConfirmationResult::default(),
        }
    }

    async fn dispatch(&mut self, protocol: &'static str, request: OutboundRequest) -> Result<()> {
        if self.stage != Stage::Created {
            debug!(protocol, stage = ?self.stage, "confirmation already sent");
            return Ok(());
        }

        debug!(protocol, endpoint = %self.endpoint, "sending confirmation request");
        let response = self.transport.post(request).await?;
        debug!(protocol, status = response.status, "received PayPal response");

        if response.status != 200 {
            warn!(protocol, status = response.status, "PayPal rejected confirmation request");
            return Err(ConfirmError::RequestError(format!(
                "PayPal returned a {} status",
                response.status
            )));
        }

        self.response = Some(response);
        self.stage = Stage::Sent;
        Ok(())
    }

    fn process(&mut self, parse: impl FnOnce(&RawResponse) -> ConfirmationResult) {
        match self.response.take() {
            Some(response) => {
                self.result = parse(&response);
                self.stage = Stage::Processed;
            }
            None => debug!(stage = ?self.stage, "no response to process"),
        }
    }
}

/// Confirms a payment through Payment Data Transfer.
pub struct LookupConfirmation {
    request: LookupRequest,
    attempt: Attempt,
}

impl LookupConfirmation {
    pub fn new(request: LookupRequest, transport: TransportRef, config: &ClientConfig) -> Self {
        let endpoint = config.endpoint(request.environment());
        Self {
            attempt: Attempt::new(transport, endpoint),
            request,
        }
    }

    pub fn request(&self) -> &LookupRequest {
        &self.request
    }
}

#[async_trait]
impl Confirmation for LookupConfirmation {
    async fn send(&mut self) -> Result<()> {
        let outbound = self.request.to_outbound(&self.attempt.endpoint);
        self.attempt.dispatch("pdt", outbound).await
    }

    fn process(&mut self) {
        self.attempt
            .process(|response| parser::parse_lookup(&response.body));
    }

    fn stage(&self) -> Stage {
        self.attempt.stage
    }

    fn response(&self) -> Option<&RawResponse> {
        self.attempt.response.as_ref()
    }

    fn result(&self) -> ConfirmationResult {
        self.attempt.result.clone()
    }
}

/// Verifies an Instant Payment Notification by echoing it back to PayPal.
pub struct NotificationConfirmation {
    request: NotificationRequest,
    attempt: Attempt,
}

impl NotificationConfirmation {
    pub fn new(
        request: NotificationRequest,
        transport: TransportRef,
        config: &ClientConfig,
    ) -> Self {
        let endpoint = config.endpoint(request.environment());
        Self {
            attempt: Attempt::new(transport, endpoint),
            request,
        }
    }

    pub fn request(&self) -> &NotificationRequest {
        &self.request
    }
}

#[async_trait]
impl Confirmation for NotificationConfirmation {
    async fn send(&mut self) -> Result<()> {
        let outbound = self.request.to_outbound(&self.attempt.endpoint);
        self.attempt.dispatch("ipn", outbound).await
    }

    fn process(&mut self) {
        let query = self.request.query();
        self.attempt
            .process(|response| parser::parse_notification(&response.body, query));
    }

    fn stage(&self) -> Stage {
        self.attempt.stage
    }

    fn response(&self) -> Option<&RawResponse> {
        self.attempt.response.as_ref()
    }

    fn result(&self) -> ConfirmationResult {
        self.attempt.result.clone()
    }
}
