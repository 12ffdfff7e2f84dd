//! The PayWhirl façade and its request dispatcher.
//!
//! # Design
//! `PayWhirl` holds an immutable `ClientConfig` and a `Transport`, nothing
//! else, so one instance can be shared freely between threads. Every endpoint
//! method funnels into `request`, which is split the same way as the wire
//! exchange: `build_request` produces an `HttpRequest`, the transport executes
//! it, and `parse_response` turns the `HttpResponse` into a JSON value or an
//! `ApiError`. One call is one round trip; nothing is retried or cached.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Synchronous client for the PayWhirl API.
///
/// Endpoint methods live in the `endpoints` module, grouped by resource.
#[derive(Debug, Clone)]
pub struct PayWhirl<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl PayWhirl<UreqTransport> {
    /// Client for the production API with TLS verification on.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key, api_secret))
    }

    /// Client for an alternate deployment, e.g. a staging host.
    pub fn with_base(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_base: &str,
    ) -> Self {
        Self::from_config(ClientConfig::new(api_key, api_secret).with_api_base(api_base))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.verify_ssl());
        Self { config, transport }
    }
}

impl<T: Transport> PayWhirl<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for `method` on `path`.
    ///
    /// `params` must serialize to a JSON object, or to `null` for no
    /// parameters (pass `&()`). GET parameters become query pairs, POST
    /// parameters a JSON body.
    pub fn build_request<P>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &P,
    ) -> Result<HttpRequest, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let params = to_params(params)?;
        let mut headers = vec![
            ("api_key".to_string(), self.config.api_key().to_string()),
            ("api_secret".to_string(), self.config.api_secret().to_string()),
        ];

        let (query, body) = match method {
            HttpMethod::Get => (query_pairs(&params), None),
            HttpMethod::Post => {
                let body = serde_json::to_string(&params)
                    .map_err(|e| ApiError::Serialization(e.to_string()))?;
                headers.push(("content-type".to_string(), "application/json".to_string()));
                (Vec::new(), Some(body))
            }
        };

        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.config.api_base()),
            query,
            headers,
            body,
        })
    }

    /// Decode a response: JSON for 2xx, `ApiError::Http` for anything else.
    /// An empty 2xx body decodes to `Value::Null`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Perform one call against the API. Endpoint methods are thin wrappers
    /// over this; it is public for endpoints the client does not cover yet.
    pub fn request<P>(&self, method: HttpMethod, path: &str, params: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, params)?;
        debug!(%method, path, "sending PayWhirl request");

        let response = self.transport.execute(request)?;
        if response.is_success() {
            debug!(%method, path, status = response.status, "PayWhirl request succeeded");
        } else {
            warn!(%method, path, status = response.status, "PayWhirl request failed");
        }

        self.parse_response(response)
    }

    pub(crate) fn get<P>(&self, path: &str, params: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.request(HttpMethod::Get, path, params)
    }

    pub(crate) fn post<P>(&self, path: &str, params: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.request(HttpMethod::Post, path, params)
    }
}

/// Serialize call parameters into a JSON object. `null` means none.
pub(crate) fn to_params<P>(params: &P) -> Result<Map<String, Value>, ApiError>
where
    P: Serialize + ?Sized,
{
    match serde_json::to_value(params).map_err(|e| ApiError::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ApiError::Serialization(format!(
            "parameters must be a JSON object, got {other}"
        ))),
    }
}

/// Parameters of `payload` with `key` set to `value`, overriding any
/// existing entry. Used where an endpoint requires an identifier field.
pub(crate) fn params_with<P>(
    payload: &P,
    key: &str,
    value: impl Into<Value>,
) -> Result<Map<String, Value>, ApiError>
where
    P: Serialize + ?Sized,
{
    let mut params = to_params(payload)?;
    params.insert(key.to_string(), value.into());
    Ok(params)
}

/// Flatten a parameter object into query pairs. `null` entries are dropped,
/// arrays repeat their key, and non-string scalars use their JSON text.
fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Array(items) => {
                pairs.extend(items.iter().filter_map(query_value).map(|v| (key.clone(), v)));
            }
            other => {
                if let Some(v) = query_value(other) {
                    pairs.push((key.clone(), v));
                }
            }
        }
    }
    pairs
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
