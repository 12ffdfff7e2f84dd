//! Gateways, charges, cards and promo codes.

use serde::Serialize;
use serde_json::{json, Value};

use crate::client::PayWhirl;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::RefundOptions;

impl<T: Transport> PayWhirl<T> {
    pub fn get_gateways(&self) -> Result<Value, ApiError> {
        self.get("/gateways", &())
    }

    pub fn get_gateway(&self, gateway_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/gateway/{gateway_id}"), &())
    }

    /// Charge a customer immediately. The response is the resulting invoice.
    pub fn create_charge<P>(&self, charge: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/create/charge", charge)
    }

    pub fn get_charge(&self, charge_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/charge/{charge_id}"), &())
    }

    pub fn refund_charge(&self, charge_id: u64, options: &RefundOptions) -> Result<Value, ApiError> {
        self.post(&format!("/refund/charge/{charge_id}"), options)
    }

    /// Cards on file for a customer.
    pub fn get_cards(&self, customer_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/cards/{customer_id}"), &())
    }

    pub fn get_card(&self, card_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/card/{card_id}"), &())
    }

    pub fn create_card<P>(&self, card: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/create/card", card)
    }

    pub fn delete_card(&self, card_id: u64) -> Result<Value, ApiError> {
        self.post("/delete/card", &json!({ "id": card_id }))
    }

    pub fn get_promos(&self) -> Result<Value, ApiError> {
        self.get("/promo", &())
    }

    pub fn get_promo(&self, promo_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/promo/{promo_id}"), &())
    }

    pub fn create_promo<P>(&self, promo: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/create/promo", promo)
    }

    pub fn delete_promo(&self, promo_id: u64) -> Result<Value, ApiError> {
        self.post("/delete/promo", &json!({ "id": promo_id }))
    }
}
