//! Network execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the single seam between the client and the network. The
//! default `UreqTransport` performs a blocking round trip with ureq; tests
//! substitute a recording fake. Non-2xx statuses are returned as data, not
//! errors, so the dispatcher alone decides what a failure is.

use std::fmt;

use ureq::tls::TlsConfig;
use ureq::Agent;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
    verify_ssl: bool,
}

impl UreqTransport {
    pub fn new(verify_ssl: bool) -> Self {
        let tls = TlsConfig::builder()
            .disable_verification(!verify_ssl)
            .build();
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .tls_config(tls)
            .build()
            .new_agent();
        Self { agent, verify_ssl }
    }

    /// Whether server certificates are validated on each call.
    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("verify_ssl", &self.verify_ssl)
            .finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.full_url();

        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match request.body.as_deref() {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        // Headers are kept for callers pairing `build_request` with their own
        // `parse_response` handling; the dispatcher itself reads only status and body.
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
