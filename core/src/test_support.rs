use std::sync::Mutex;

use serde_json::Value;

use crate::client::PayWhirl;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

pub const BASE_URL: &str = "https://api.test.paywhirl.local";

/// Transport that records every request and answers with a canned response.
#[derive(Debug)]
pub struct RecordingTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body: self.body.clone(),
        })
    }
}

pub fn client_with_response(status: u16, body: &str) -> PayWhirl<RecordingTransport> {
    let config = ClientConfig::new("pwpk_test", "pwpsk_test").with_api_base(BASE_URL);
    PayWhirl::with_transport(config, RecordingTransport::new(status, body))
}

pub fn client() -> PayWhirl<RecordingTransport> {
    client_with_response(200, r#"{"status":"success"}"#)
}

/// Assert the last request hit `method` on `path` and return it.
pub fn sent(client: &PayWhirl<RecordingTransport>, method: HttpMethod, path: &str) -> HttpRequest {
    let req = client.transport().last();
    assert_eq!(req.method, method, "method for {path}");
    assert_eq!(req.url, format!("{BASE_URL}{path}"), "url for {path}");
    req
}

/// Decoded JSON body of a POST request.
pub fn body(req: &HttpRequest) -> Value {
    serde_json::from_str(req.body.as_deref().expect("request has no body")).unwrap()
}

/// Query pairs sorted by key for order-independent comparison.
pub fn query(req: &HttpRequest) -> Vec<(String, String)> {
    let mut pairs = req.query.clone();
    pairs.sort();
    pairs
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
