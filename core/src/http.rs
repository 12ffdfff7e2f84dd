//! HTTP requests and responses as plain data.
//!
//! # Design
//! The dispatcher builds an `HttpRequest` and hands it to a `Transport`; the
//! transport answers with an `HttpResponse`. Neither type knows about the
//! network, which keeps request construction deterministic and lets tests
//! inspect exactly what would go on the wire.

use std::fmt;

/// HTTP verbs used by the PayWhirl API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is the configured base joined with the endpoint path; `query` holds
/// the GET parameters still unencoded. Use `full_url` for the exact target.
#[derive(Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// The request URL with the query string appended, if any.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{query}", self.url)
    }

    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("api_secret") {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("query", &self.query)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(query: Vec<(&str, &str)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "https://api.paywhirl.com/customers".to_string(),
            query: query
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            headers: vec![("api_key".to_string(), "pk".to_string())],
            body: None,
        }
    }

    #[test]
    fn full_url_without_query_is_plain_url() {
        assert_eq!(get(vec![]).full_url(), "https://api.paywhirl.com/customers");
    }

    #[test]
    fn full_url_encodes_query_pairs() {
        let req = get(vec![("limit", "100"), ("keyword", "jane doe&co")]);
        assert_eq!(
            req.full_url(),
            "https://api.paywhirl.com/customers?limit=100&keyword=jane+doe%26co"
        );
    }

    #[test]
    fn header_lookup_ignores_case() {
        assert_eq!(get(vec![]).header("API_KEY"), Some("pk"));
        assert_eq!(get(vec![]).header("api_secret"), None);
    }

    #[test]
    fn debug_output_hides_secret_header() {
        let mut req = get(vec![("limit", "100")]);
        req.headers
            .push(("api_secret".to_string(), "pwpsk_hidden".to_string()));
        let shown = format!("{req:?}");
        assert!(!shown.contains("pwpsk_hidden"));
        assert!(shown.contains("<redacted>"));
        assert!(shown.contains("\"api_key\", \"pk\""));
        assert!(shown.contains("/customers"));
    }

    #[test]
    fn success_range_is_2xx() {
        let mut resp = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(resp.is_success());
        resp.status = 302;
        assert!(!resp.is_success());
        resp.status = 199;
        assert!(!resp.is_success());
    }
}
