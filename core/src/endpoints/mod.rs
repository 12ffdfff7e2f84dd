//! Endpoint methods of `PayWhirl`, one `impl` block per resource group.
//!
//! Every method maps to exactly one REST endpoint. Paths are reproduced
//! verbatim from the API, including its inconsistencies (`/promo` vs
//! `/create/promo`, the trailing slash on `/shipping/`).

mod account;
mod customers;
mod invoices;
mod payments;
mod plans;
mod subscriptions;
