//! Client configuration.

use std::fmt;

/// Production endpoint of the PayWhirl API.
pub const DEFAULT_API_BASE: &str = "https://api.paywhirl.com";

/// Credentials and target of a `PayWhirl` client.
///
/// Set once before the client is built and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    api_secret: String,
    api_base: String,
    verify_ssl: bool,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            verify_ssl: true,
        }
    }

    /// Point the client at another deployment. A trailing `/` is dropped so
    /// endpoint paths can always start with one.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Toggle TLS certificate verification. On by default.
    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_with_tls_verification() {
        let config = ClientConfig::new("pwpk_x", "pwpsk_x");
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert!(config.verify_ssl());
        assert_eq!(config.api_key(), "pwpk_x");
        assert_eq!(config.api_secret(), "pwpsk_x");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("k", "s").with_api_base("http://localhost:3000/");
        assert_eq!(config.api_base(), "http://localhost:3000");
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = ClientConfig::new("pwpk_visible", "pwpsk_hidden").with_verify_ssl(false);
        let shown = format!("{config:?}");
        assert!(shown.contains("pwpk_visible"));
        assert!(!shown.contains("pwpsk_hidden"));
        assert!(shown.contains("verify_ssl: false"));
    }
}
