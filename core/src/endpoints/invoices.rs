use serde::Serialize;
use serde_json::{json, Value};

use crate::client::PayWhirl;
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport> PayWhirl<T> {
    pub fn get_invoice(&self, invoice_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/invoice/{invoice_id}"), &())
    }

    /// Upcoming invoices of a customer, or every invoice when `all` is set.
    /// The server reads `all` as `"1"` for true and an empty string for false.
    pub fn get_invoices(&self, customer_id: u64, all: bool) -> Result<Value, ApiError> {
        let all = if all { "1" } else { "" };
        self.get(&format!("/invoices/{customer_id}"), &json!({ "all": all }))
    }

    /// Charge an upcoming invoice now. `options` carries the optional
    /// processing parameters the API documents.
    pub fn process_invoice<P>(&self, invoice_id: u64, options: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post(&format!("/invoice/{invoice_id}/process"), options)
    }

    pub fn mark_invoice_as_paid(&self, invoice_id: u64) -> Result<Value, ApiError> {
        self.post(&format!("/invoice/{invoice_id}/mark-as-paid"), &())
    }

    pub fn add_promo_code_to_invoice(
        &self,
        invoice_id: u64,
        promo_code: &str,
    ) -> Result<Value, ApiError> {
        self.post(
            &format!("/invoice/{invoice_id}/add-promo"),
            &json!({ "promo_code": promo_code }),
        )
    }

    pub fn remove_promo_code_from_invoice(&self, invoice_id: u64) -> Result<Value, ApiError> {
        self.post(&format!("/invoice/{invoice_id}/remove-promo"), &())
    }

    /// Pay the invoice with another of the customer's cards.
    pub fn update_invoice_card(&self, invoice_id: u64, card_id: u64) -> Result<Value, ApiError> {
        self.post(
            &format!("/invoice/{invoice_id}/card"),
            &json!({ "card_id": card_id }),
        )
    }

    /// Set line item quantities. `line_items` maps item ids to the new
    /// quantity, e.g. `{"1111": 4, "1112": 5}`.
    pub fn update_invoice_items<P>(&self, invoice_id: u64, line_items: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post(&format!("/invoice/{invoice_id}/items"), line_items)
    }

    pub fn create_invoice<P>(&self, invoice: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/invoices", invoice)
    }

    pub fn delete_invoice(&self, invoice_id: u64) -> Result<Value, ApiError> {
        self.post("/delete/invoice", &json!({ "id": invoice_id }))
    }
}
