//! Account-level resources: email templates, statistics, shipping and tax
//! rules, and MultiAuth login tokens.

use serde::Serialize;
use serde_json::Value;

use crate::client::PayWhirl;
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    pub fn get_email_template(&self, template_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/email/{template_id}"), &())
    }

    /// Send a system email built from one of the account's templates. The
    /// accepted fields depend on the template.
    pub fn send_email<P>(&self, email: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/send-email", email)
    }

    pub fn get_account(&self) -> Result<Value, ApiError> {
        self.get("/account", &())
    }

    /// Invoice and revenue statistics.
    pub fn get_stats(&self) -> Result<Value, ApiError> {
        self.get("/stats", &())
    }

    pub fn get_shipping_rules(&self) -> Result<Value, ApiError> {
        self.get("/shipping/", &())
    }

    pub fn get_shipping_rule(&self, rule_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/shipping/{rule_id}"), &())
    }

    pub fn get_tax_rules(&self) -> Result<Value, ApiError> {
        self.get("/tax", &())
    }

    pub fn get_tax_rule(&self, rule_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/tax/{rule_id}"), &())
    }

    /// Token that logs a customer into a widget without a password prompt.
    pub fn get_multi_auth_token<P>(&self, request: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/multiauth", request)
    }
}
