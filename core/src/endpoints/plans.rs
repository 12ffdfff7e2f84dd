use serde::Serialize;
use serde_json::Value;

use crate::client::{params_with, PayWhirl};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::ListOptions;

impl<T: Transport> PayWhirl<T> {
    /// List plans. The server orders by descending id unless told otherwise.
    pub fn get_plans(&self, options: &ListOptions) -> Result<Value, ApiError> {
        self.get("/plans", options)
    }

    pub fn get_plan(&self, plan_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/plan/{plan_id}"), &())
    }

    /// Create a billing plan from a JSON object of plan rules.
    pub fn create_plan<P>(&self, plan: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/create/plan", plan)
    }

    pub fn update_plan<P>(&self, plan_id: u64, changes: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        self.post("/update/plan", &params_with(changes, "id", plan_id)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::test_support::{body, client, pairs, query, sent};
    use crate::types::{ListOptions, SortDirection};

    #[test]
    fn get_plans_with_bounds() {
        let c = client();
        let options = ListOptions {
            limit: None,
            order_key: Some("name".to_string()),
            order_direction: Some(SortDirection::Desc),
            before_id: Some(40),
            ..Default::default()
        };
        c.get_plans(&options).unwrap();
        let req = sent(&c, HttpMethod::Get, "/plans");
        assert_eq!(
            query(&req),
            pairs(&[
                ("before_id", "40"),
                ("order_direction", "desc"),
                ("order_key", "name"),
            ])
        );
    }

    #[test]
    fn get_plan_by_id() {
        let c = client();
        c.get_plan(8).unwrap();
        let req = sent(&c, HttpMethod::Get, "/plan/8");
        assert!(req.query.is_empty());
    }

    #[test]
    fn create_and_update_plan() {
        let c = client();
        let plan = json!({ "name": "Gold", "billing_amount": 19.99, "billing_frequency": "month" });
        c.create_plan(&plan).unwrap();
        let req = sent(&c, HttpMethod::Post, "/create/plan");
        assert_eq!(body(&req), plan);

        c.update_plan(8, &json!({ "name": "Platinum" })).unwrap();
        let req = sent(&c, HttpMethod::Post, "/update/plan");
        assert_eq!(body(&req), json!({ "id": 8, "name": "Platinum" }));
    }
}
