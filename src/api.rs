//! One-shot entry points. Each call validates its input, builds an HTTPS
//! transport from [`ClientConfig::from_env`], makes a single request and
//! returns the parsed result.
//!
//! Use [`Confirmer`] directly to reuse a client or to swap the transport.

use crate::application::confirmer::{Confirmer, run};
use crate::config::ClientConfig;
use crate::domain::request::{LookupRequest, NotificationRequest, Payload};
use crate::domain::response::ConfirmationResult;
use crate::error::Result;

/// Confirms a transaction via PayPal PDT.
pub async fn confirm_via_lookup(
    transaction_id: &str,
    identity_token: &str,
    sandbox: bool,
) -> Result<ConfirmationResult> {
    let request = LookupRequest::new(transaction_id, identity_token, sandbox)?;
    lookup_with(ClientConfig::from_env(), request).await
}

/// Verifies an IPN payload with PayPal.
pub async fn confirm_via_notification(
    payload: impl Into<Payload>,
    sandbox: bool,
) -> Result<ConfirmationResult> {
    let request = NotificationRequest::new(payload, sandbox);
    notification_with(ClientConfig::from_env(), request).await
}

async fn lookup_with(config: ClientConfig, request: LookupRequest) -> Result<ConfirmationResult> {
    let confirmer = Confirmer::from_config(config)?;
    run(&mut confirmer.lookup_for(request)).await
}

async fn notification_with(
    config: ClientConfig,
    request: NotificationRequest,
) -> Result<ConfirmationResult> {
    let confirmer = Confirmer::from_config(config)?;
    run(&mut confirmer.notification_for(request)).await
}
