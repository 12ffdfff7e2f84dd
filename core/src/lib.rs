//! Synchronous client for the PayWhirl subscription billing API.
//!
//! # Overview
//! `PayWhirl` exposes one method per REST endpoint. Each method assembles its
//! parameters, and the shared dispatcher sends them with the account's
//! `api_key` / `api_secret` headers: as a query string for GET, as a JSON
//! body for POST. Successful responses come back as `serde_json::Value`;
//! any non-2xx status becomes `ApiError::Http` carrying the status and body.
//!
//! ```no_run
//! use paywhirl_core::{ApiError, ListOptions, PayWhirl};
//!
//! let pw = PayWhirl::new("pwpk_xxxxxxxxxxxxxxx", "pwpsk_xxxxxxxxxxx");
//! match pw.get_customers(&ListOptions::default()) {
//!     Ok(customers) => println!("{customers}"),
//!     Err(ApiError::Http { status, body }) => eprintln!("{status}: {body}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```
//!
//! # Design
//! - `PayWhirl` holds only immutable configuration and a transport, so it is
//!   `Send + Sync` and needs no locking.
//! - Request construction (`build_request`) and response decoding
//!   (`parse_response`) are pure; only the `Transport` touches the network.
//! - No retries, pagination or caching: one call is one round trip.

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::PayWhirl;
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    AnswerUpdate, ListOptions, NewCustomer, NewSubscription, RefundOptions, SortDirection,
    SubscriberListOptions, SubscriberOrder, SubscriptionChange, DEFAULT_LIST_LIMIT,
    DEFAULT_QUESTION_LIMIT, DEFAULT_SUBSCRIBER_LIMIT,
};
