use crate::domain::ports::OutboundRequest;
use crate::error::{ConfirmError, Result};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use url::form_urlencoded;

const PDT_COMMAND: &str = "_notify-synch";
const IPN_COMMAND: &str = "cmd=_notify-validate";

/// Which PayPal endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Live,
    Sandbox,
}

impl From<bool> for Environment {
    fn from(sandbox: bool) -> Self {
        if sandbox { Self::Sandbox } else { Self::Live }
    }
}

/// A validated PDT lookup: transaction id plus the merchant identity token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    transaction_id: String,
    identity_token: String,
    environment: Environment,
}

impl LookupRequest {
    /// Rejects an empty transaction id or identity token.
    pub fn new(
        transaction_id: impl Into<String>,
        identity_token: impl Into<String>,
        sandbox: bool,
    ) -> Result<Self> {
        let transaction_id = transaction_id.into();
        let identity_token = identity_token.into();
        if transaction_id.is_empty() {
            return Err(ConfirmError::InvalidData(format!(
                "{transaction_id:?} is not a valid PayPal transaction id"
            )));
        }
        if identity_token.is_empty() {
            return Err(ConfirmError::InvalidData(
                "an empty string is not a valid PayPal identity token".to_string(),
            ));
        }
        Ok(Self {
            transaction_id,
            identity_token,
            environment: sandbox.into(),
        })
    }

    pub fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    pub fn identity_token(&self) -> &str {
        &self.identity_token
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Form-encoded `cmd`, `tx`, `at` POST to `endpoint`.
    pub fn to_outbound(&self, endpoint: &str) -> OutboundRequest {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("cmd", PDT_COMMAND)
            .append_pair("tx", &self.transaction_id)
            .append_pair("at", &self.identity_token)
            .finish();
        OutboundRequest {
            url: endpoint.to_string(),
            headers: vec![(
                "content-type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )],
            body: Some(body),
        }
    }
}

/// An IPN payload as received from PayPal: either the raw query string or
/// its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Query(String),
    Fields(Vec<(String, String)>),
}

impl Payload {
    /// Canonical query-string form; fields are form-encoded in order.
    pub fn into_query(self) -> String {
        match self {
            Self::Query(query) => query,
            Self::Fields(fields) => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(fields)
                .finish(),
        }
    }
}

impl From<&str> for Payload {
    fn from(query: &str) -> Self {
        Self::Query(query.to_string())
    }
}

impl From<String> for Payload {
    fn from(query: String) -> Self {
        Self::Query(query)
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Payload {
    fn from(fields: Vec<(K, V)>) -> Self {
        Self::Fields(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for Payload {
    fn from(fields: BTreeMap<K, V>) -> Self {
        fields.into_iter().collect::<Vec<_>>().into()
    }
}

impl<K: Into<String>, V: Into<String>> From<HashMap<K, V>> for Payload {
    fn from(fields: HashMap<K, V>) -> Self {
        let sorted: BTreeMap<String, String> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        sorted.into()
    }
}

impl TryFrom<Value> for Payload {
    type Error = ConfirmError;

    /// A JSON string is a raw query; an object of scalars is a field map.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(query) => Ok(Self::Query(query)),
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| scalar_text(&key, value).map(|text| (key, text)))
                .collect::<Result<Vec<_>>>()
                .map(Self::Fields),
            other => Err(ConfirmError::InvalidData(format!(
                "{other} is not a valid IPN query string"
            ))),
        }
    }
}

fn scalar_text(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(ConfirmError::InvalidData(format!(
            "IPN field {key:?} must be a scalar value"
        ))),
    }
}

/// A validated IPN verification request. The payload is kept in query-string
/// form exactly as it will be echoed back to PayPal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    query: String,
    environment: Environment,
}

impl NotificationRequest {
    pub fn new(payload: impl Into<Payload>, sandbox: bool) -> Self {
        Self {
            query: payload.into().into_query(),
            environment: sandbox.into(),
        }
    }

    /// Builds a request from an untyped JSON payload, rejecting anything that
    /// is neither text nor a map of scalars.
    pub fn from_json(payload: Value, sandbox: bool) -> Result<Self> {
        Ok(Self::new(Payload::try_from(payload)?, sandbox))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// `endpoint?cmd=_notify-validate&<payload>` with no body.
    pub fn to_outbound(&self, endpoint: &str) -> OutboundRequest {
        OutboundRequest {
            url: format!("{endpoint}?{IPN_COMMAND}&{}", self.query),
            headers: vec![(
                "content_type".to_string(),
                "x-www-form-urlencoded".to_string(),
            )],
            body: None,
        }
    }
}
