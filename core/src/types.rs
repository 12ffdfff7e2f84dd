//! Typed arguments for PayWhirl endpoints.
//!
//! # Design
//! Optional fields are `Option<T>` and are skipped when `None`, so a request
//! only carries what the caller actually set. The list option types are the
//! exception in one respect: their `Default` fills in the documented result
//! limit, which therefore shows up in the query string of a default call.
//! Responses are not modelled here; the server's record shapes are returned as
//! `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result limit the server documents for customer and plan listings.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Result limit the server documents for the subscriber listing.
pub const DEFAULT_SUBSCRIBER_LIMIT: u32 = 20;

/// Result limit used by `get_questions` unless the caller picks another.
pub const DEFAULT_QUESTION_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordering accepted by the subscriber listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberOrder {
    Asc,
    Desc,
    Rand,
}

/// Filters for the customer and plan listings.
///
/// `before_id` / `after_id` bound the returned ids exclusively. `keyword` is
/// only honoured by the customer listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIST_LIMIT),
            order_key: None,
            order_direction: None,
            before_id: None,
            after_id: None,
            keyword: None,
        }
    }
}

/// Filters for the active subscriber listing. The `starting_*` bounds apply
/// to subscription ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriberListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SubscriberOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_before: Option<u64>,
}

impl Default for SubscriberListOptions {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_SUBSCRIBER_LIMIT),
            order: None,
            keyword: None,
            starting_after: None,
            starting_before: None,
        }
    }
}

/// Payload for creating a customer. `extra` carries any further customer
/// field the API accepts (address, phone, metadata...). It must not repeat
/// the named fields: a duplicate key in `extra` replaces the typed value in
/// the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub currency: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer to a profile question for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerUpdate {
    pub customer_id: u64,
    pub question_name: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<u64>,
}

/// Subscribes an existing customer to a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubscription {
    pub customer_id: u64,
    pub plan_id: u64,
    /// Server default is 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_id: Option<u64>,
    /// UNIX timestamp ending a trial period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,
}

/// Optional adjustments applied alongside a plan change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments_left: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<u64>,
}

/// Refund parameters. With both fields `None` the whole charge is refunded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<f64>,
    /// Record the refund without moving money through the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_only: Option<bool>,
}
