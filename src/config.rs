use crate::domain::request::Environment;

pub const LIVE_ENDPOINT: &str = "https://www.paypal.com/cgi-bin/webscr";
pub const SANDBOX_ENDPOINT: &str = "https://www.sandbox.paypal.com/cgi-bin/webscr";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints and transport settings used by a [`Confirmer`](crate::application::confirmer::Confirmer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Live `webscr` endpoint.
    pub live_url: String,
    /// Sandbox `webscr` endpoint.
    pub sandbox_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            live_url: LIVE_ENDPOINT.to_string(),
            sandbox_url: SANDBOX_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `PAYPAL_CONFIRM_LIVE_URL` | Live endpoint |
    /// | `PAYPAL_CONFIRM_SANDBOX_URL` | Sandbox endpoint |
    /// | `PAYPAL_CONFIRM_TIMEOUT` | Request timeout in seconds |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            live_url: lookup("PAYPAL_CONFIRM_LIVE_URL").unwrap_or(defaults.live_url),
            sandbox_url: lookup("PAYPAL_CONFIRM_SANDBOX_URL").unwrap_or(defaults.sandbox_url),
            timeout_secs: lookup("PAYPAL_CONFIRM_TIMEOUT")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn with_live_url(mut self, url: impl Into<String>) -> Self {
        self.live_url = url.into();
        self
    }

    pub fn with_sandbox_url(mut self, url: impl Into<String>) -> Self {
        self.sandbox_url = url.into();
        self
    }

    /// Sets the request timeout. Zero keeps the default, since a zero
    /// timeout fails every request.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = if secs == 0 { DEFAULT_TIMEOUT_SECS } else { secs };
        self
    }

    /// Selects the endpoint for the given environment.
    pub fn endpoint(&self, environment: Environment) -> &str {
        match environment {
            Environment::Live => &self.live_url,
            Environment::Sandbox => &self.sandbox_url,
        }
    }
}
