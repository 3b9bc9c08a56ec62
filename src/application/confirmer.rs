use crate::application::confirmation::{Confirmation, LookupConfirmation, NotificationConfirmation};
use crate::config::ClientConfig;
use crate::domain::ports::TransportRef;
use crate::domain::request::{LookupRequest, NotificationRequest, Payload};
use crate::domain::response::ConfirmationResult;
use crate::error::Result;
use crate::infrastructure::http::HttpTransport;
use std::sync::Arc;

/// Builds and runs confirmation attempts against one transport and config.
///
/// A `Confirmer` holds no per-attempt state, so one instance can serve
/// concurrent callers.
#[derive(Clone)]
pub struct Confirmer {
    transport: TransportRef,
    config: ClientConfig,
}

impl Confirmer {
    /// Creates a confirmer over an arbitrary transport.
    pub fn new(transport: TransportRef, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Creates a confirmer that talks to PayPal over HTTPS.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::new(transport, config))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates the inputs and returns an unsent PDT confirmation.
    pub fn lookup(
        &self,
        transaction_id: &str,
        identity_token: &str,
        sandbox: bool,
    ) -> Result<LookupConfirmation> {
        let request = LookupRequest::new(transaction_id, identity_token, sandbox)?;
        Ok(self.lookup_for(request))
    }

    /// Returns an unsent PDT confirmation for an already validated request.
    pub fn lookup_for(&self, request: LookupRequest) -> LookupConfirmation {
        LookupConfirmation::new(request, self.transport.clone(), &self.config)
    }

    /// Returns an unsent IPN confirmation for `payload`.
    pub fn notification(
        &self,
        payload: impl Into<Payload>,
        sandbox: bool,
    ) -> NotificationConfirmation {
        self.notification_for(NotificationRequest::new(payload, sandbox))
    }

    pub fn notification_for(&self, request: NotificationRequest) -> NotificationConfirmation {
        NotificationConfirmation::new(request, self.transport.clone(), &self.config)
    }

    pub async fn confirm_via_lookup(
        &self,
        transaction_id: &str,
        identity_token: &str,
        sandbox: bool,
    ) -> Result<ConfirmationResult> {
        let mut pdt = self.lookup(transaction_id, identity_token, sandbox)?;
        run(&mut pdt).await
    }

    pub async fn confirm_via_notification(
        &self,
        payload: impl Into<Payload>,
        sandbox: bool,
    ) -> Result<ConfirmationResult> {
        let mut ipn = self.notification(payload, sandbox);
        run(&mut ipn).await
    }
}

/// Sends, processes and returns the result of any confirmation.
pub async fn run(confirmation: &mut dyn Confirmation) -> Result<ConfirmationResult> {
    confirmation.send().await?;
    confirmation.process();
    Ok(confirmation.result())
}
