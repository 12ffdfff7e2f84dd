use serde::Serialize;
use serde_json::{json, Value};

use crate::client::{params_with, PayWhirl};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{AnswerUpdate, ListOptions, NewCustomer};

impl<T: Transport> PayWhirl<T> {
    /// List customers on the account, filtered by `options`.
    pub fn get_customers(&self, options: &ListOptions) -> Result<Value, ApiError> {
        self.get("/customers", options)
    }

    pub fn get_customer(&self, customer_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/customer/{customer_id}"), &())
    }

    /// All addresses stored for a customer.
    pub fn get_addresses(&self, customer_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/customer/addresses/{customer_id}"), &())
    }

    pub fn get_address(&self, address_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/customer/address/{address_id}"), &())
    }

    /// The customer record together with their addresses and profile answers.
    pub fn get_profile(&self, customer_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/customer/profile/{customer_id}"), &())
    }

    /// Check a customer's credentials. `password` may be plain text or a
    /// bcrypt hash. The answer is `{"status": "success" | "failure"}`.
    pub fn auth_customer(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        self.post(
            "/auth/customer",
            &json!({ "email": email, "password": password }),
        )
    }

    pub fn create_customer(&self, customer: &NewCustomer) -> Result<Value, ApiError> {
        self.post("/create/customer", customer)
    }

    /// Update fields of an existing customer. `changes` may hold any field of
    /// a customer record; `id` is set from `customer_id`.
    pub fn update_customer<P>(&self, customer_id: u64, changes: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/update/customer", &params_with(changes, "id", customer_id)?)
    }

    /// Soft-delete a customer. Pass `forget: Some(1)` to also obfuscate the
    /// retained personal data.
    pub fn delete_customer(&self, customer_id: u64, forget: Option<u8>) -> Result<Value, ApiError> {
        let mut params = json!({ "id": customer_id });
        if let Some(forget) = forget {
            params["forget"] = forget.into();
        }
        self.post("/delete/customer", &params)
    }

    /// Profile questions configured on the account, at most `limit` of them
    /// (see `DEFAULT_QUESTION_LIMIT`).
    pub fn get_questions(&self, limit: u32) -> Result<Value, ApiError> {
        self.get("/questions", &json!({ "limit": limit }))
    }

    pub fn update_answer(&self, answer: &AnswerUpdate) -> Result<Value, ApiError> {
        self.post("/update/answer", answer)
    }

    pub fn get_answers(&self, customer_id: u64) -> Result<Value, ApiError> {
        self.get("/answers", &json!({ "customer_id": customer_id }))
    }
}
