//! In-memory stand-in for the PayWhirl API.
//!
//! Covers the customer endpoints plus `/account` and `/stats`, enough to
//! drive the client end to end. Every route requires the `api_key` and
//! `api_secret` headers to match the configured credentials.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

pub const DEFAULT_API_KEY: &str = "pwpk_mock";
pub const DEFAULT_API_SECRET: &str = "pwpsk_mock";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            api_secret: DEFAULT_API_SECRET.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub currency: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Customer {
    fn matches(&self, keyword: &str) -> bool {
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|field| field.to_lowercase().contains(keyword))
    }
}

#[derive(Deserialize)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub currency: String,
}

#[derive(Deserialize)]
pub struct UpdateCustomer {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub currency: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteCustomer {
    pub id: u64,
    pub forget: Option<u8>,
}

#[derive(Deserialize)]
pub struct AuthCustomer {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub limit: Option<usize>,
    pub order_direction: Option<String>,
    pub before_id: Option<u64>,
    pub after_id: Option<u64>,
    pub keyword: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    customers: BTreeMap<u64, Customer>,
    next_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    app_with_credentials(Credentials::default())
}

pub fn app_with_credentials(credentials: Credentials) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customer/{id}", get(get_customer))
        .route("/create/customer", post(create_customer))
        .route("/update/customer", post(update_customer))
        .route("/delete/customer", post(delete_customer))
        .route("/auth/customer", post(auth_customer))
        .route("/account", get(account))
        .route("/stats", get(stats))
        .layer(middleware::from_fn_with_state(
            Arc::new(credentials),
            require_credentials,
        ))
        .with_state(db)
}

pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_credentials(credentials)).await
}

async fn require_credentials(
    State(credentials): State<Arc<Credentials>>,
    request: Request,
    next: Next,
) -> Response {
    let headers = request.headers();
    let header_is = |name: &str, expected: &str| {
        headers.get(name).and_then(|v| v.to_str().ok()) == Some(expected)
    };
    if header_is("api_key", &credentials.api_key) && header_is("api_secret", &credentials.api_secret)
    {
        return next.run(request).await;
    }

    warn!(path = %request.uri().path(), "rejecting request with bad credentials");
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

fn customer_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Customer not found" })),
    )
}

async fn list_customers(
    State(db): State<Db>,
    Query(query): Query<CustomerQuery>,
) -> Json<Vec<Customer>> {
    let store = db.read().await;
    let keyword = query.keyword.as_deref().map(str::to_lowercase);
    let mut customers: Vec<Customer> = store
        .customers
        .values()
        .filter(|c| query.before_id.is_none_or(|before| c.id < before))
        .filter(|c| query.after_id.is_none_or(|after| c.id > after))
        .filter(|c| keyword.as_deref().is_none_or(|k| c.matches(k)))
        .cloned()
        .collect();
    if query.order_direction.as_deref() == Some("desc") {
        customers.reverse();
    }
    customers.truncate(query.limit.unwrap_or(100));
    Json(customers)
}

async fn get_customer(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Customer> {
    let store = db.read().await;
    store
        .customers
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(customer_not_found)
}

async fn create_customer(State(db): State<Db>, Json(input): Json<NewCustomer>) -> Json<Customer> {
    let mut store = db.write().await;
    store.next_id += 1;
    let customer = Customer {
        id: store.next_id,
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        currency: input.currency,
        password: input.password,
    };
    store.customers.insert(customer.id, customer.clone());
    info!(id = customer.id, "created customer");
    Json(customer)
}

async fn update_customer(
    State(db): State<Db>,
    Json(input): Json<UpdateCustomer>,
) -> ApiResult<Customer> {
    let mut store = db.write().await;
    let customer = store
        .customers
        .get_mut(&input.id)
        .ok_or_else(customer_not_found)?;
    if let Some(first_name) = input.first_name {
        customer.first_name = first_name;
    }
    if let Some(last_name) = input.last_name {
        customer.last_name = last_name;
    }
    if let Some(email) = input.email {
        customer.email = email;
    }
    if let Some(currency) = input.currency {
        customer.currency = currency;
    }
    Ok(Json(customer.clone()))
}

async fn delete_customer(State(db): State<Db>, Json(input): Json<DeleteCustomer>) -> Json<Value> {
    let mut store = db.write().await;
    match store.customers.remove(&input.id) {
        Some(_) => {
            info!(id = input.id, forget = input.forget == Some(1), "deleted customer");
            Json(json!({ "status": "success" }))
        }
        None => Json(json!({ "status": "fail" })),
    }
}

async fn auth_customer(State(db): State<Db>, Json(input): Json<AuthCustomer>) -> Json<Value> {
    let store = db.read().await;
    let ok = store
        .customers
        .values()
        .any(|c| c.email == input.email && c.password == input.password);
    let status = if ok { "success" } else { "failure" };
    Json(json!({ "status": status }))
}

async fn account() -> Json<Value> {
    Json(json!({
        "id": 1,
        "company_name": "Mock Subscriptions Inc.",
        "currency": "USD",
        "timezone": "UTC"
    }))
}

async fn stats(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    Json(json!({
        "customers": store.customers.len(),
        "invoices_due": 0,
        "revenue": 0
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: u64) -> Customer {
        Customer {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            currency: "USD".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn customer_json_omits_password() {
        let json = serde_json::to_value(customer(1)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn keyword_match_is_case_insensitive_on_lowercased_needle() {
        let c = customer(1);
        assert!(c.matches("love"));
        assert!(c.matches("example.com"));
        assert!(!c.matches("babbage"));
    }

    #[test]
    fn new_customer_rejects_missing_email() {
        let result: Result<NewCustomer, _> = serde_json::from_str(
            r#"{"first_name":"A","last_name":"B","password":"p","currency":"USD"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_customer_fields_optional() {
        let input: UpdateCustomer = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(input.id, 3);
        assert!(input.first_name.is_none());
        assert!(input.email.is_none());
    }

    #[test]
    fn delete_customer_forget_optional() {
        let input: DeleteCustomer = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert!(input.forget.is_none());
        let input: DeleteCustomer = serde_json::from_str(r#"{"id":7,"forget":1}"#).unwrap();
        assert_eq!(input.forget, Some(1));
    }

    #[test]
    fn default_credentials() {
        let credentials = Credentials::default();
        assert_eq!(credentials.api_key, DEFAULT_API_KEY);
        assert_eq!(credentials.api_secret, DEFAULT_API_SECRET);
    }
}
