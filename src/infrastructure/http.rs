use crate::config::ClientConfig;
use crate::domain::ports::{OutboundRequest, RawResponse, Transport};
use crate::error::{ConfirmError, Result};
use async_trait::async_trait;
use std::time::Duration;

const USER_AGENT: &str = concat!("paypal-confirm/", env!("CARGO_PKG_VERSION"));

/// Sends confirmation requests to PayPal over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ConfirmError::RequestError(format!("failed to create HTTP client: {e}"))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: OutboundRequest) -> Result<RawResponse> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(request_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(request_error)?;

        Ok(RawResponse { status, body })
    }
}

fn request_error(e: reqwest::Error) -> ConfirmError {
    ConfirmError::RequestError(e.to_string())
}
