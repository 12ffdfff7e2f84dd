use serde_json::{json, Value};

use crate::client::{params_with, PayWhirl};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{NewSubscription, SubscriberListOptions, SubscriptionChange};

impl<T: Transport> PayWhirl<T> {
    /// Every subscription held by one customer.
    pub fn get_subscriptions(&self, customer_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/subscriptions/{customer_id}"), &())
    }

    pub fn get_subscription(&self, subscription_id: u64) -> Result<Value, ApiError> {
        self.get(&format!("/subscription/{subscription_id}"), &())
    }

    pub fn subscribe_customer(&self, subscription: &NewSubscription) -> Result<Value, ApiError> {
        self.post("/subscribe/customer", subscription)
    }

    /// Move a subscription to `plan_id`, applying whichever fields of
    /// `change` are set.
    pub fn update_subscription(
        &self,
        subscription_id: u64,
        plan_id: u64,
        change: &SubscriptionChange,
    ) -> Result<Value, ApiError> {
        let mut params = params_with(change, "subscription_id", subscription_id)?;
        params.insert("plan_id".to_string(), plan_id.into());
        self.post("/update/subscription", &params)
    }

    pub fn unsubscribe_customer(&self, subscription_id: u64) -> Result<Value, ApiError> {
        self.post(
            "/unsubscribe/customer",
            &json!({ "subscription_id": subscription_id }),
        )
    }

    /// Active subscribers across the account.
    pub fn get_subscribers(&self, options: &SubscriberListOptions) -> Result<Value, ApiError> {
        self.get("/subscribers", options)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::test_support::{body, client, pairs, query, sent};
    use crate::types::{NewSubscription, SubscriberListOptions, SubscriberOrder, SubscriptionChange};

    #[test]
    fn subscription_lookups() {
        let c = client();
        c.get_subscriptions(4).unwrap();
        sent(&c, HttpMethod::Get, "/subscriptions/4");
        c.get_subscription(77).unwrap();
        let req = sent(&c, HttpMethod::Get, "/subscription/77");
        assert!(req.query.is_empty());
    }

    #[test]
    fn subscribe_customer_omits_unset_fields() {
        let c = client();
        let subscription = NewSubscription {
            customer_id: 4,
            plan_id: 8,
            quantity: None,
            promo_id: None,
            trial_end: Some(1_700_000_000),
        };
        c.subscribe_customer(&subscription).unwrap();
        let req = sent(&c, HttpMethod::Post, "/subscribe/customer");
        assert_eq!(
            body(&req),
            json!({ "customer_id": 4, "plan_id": 8, "trial_end": 1_700_000_000 })
        );
    }

    #[test]
    fn update_subscription_requires_ids_only() {
        let c = client();
        c.update_subscription(77, 9, &SubscriptionChange::default())
            .unwrap();
        let req = sent(&c, HttpMethod::Post, "/update/subscription");
        assert_eq!(body(&req), json!({ "subscription_id": 77, "plan_id": 9 }));
    }

    #[test]
    fn update_subscription_with_changes() {
        let c = client();
        let change = SubscriptionChange {
            quantity: Some(2),
            card_id: Some(31),
            ..Default::default()
        };
        c.update_subscription(77, 9, &change).unwrap();
        let req = sent(&c, HttpMethod::Post, "/update/subscription");
        assert_eq!(
            body(&req),
            json!({ "subscription_id": 77, "plan_id": 9, "quantity": 2, "card_id": 31 })
        );
    }

    #[test]
    fn unsubscribe_customer_posts_subscription_id() {
        let c = client();
        c.unsubscribe_customer(77).unwrap();
        let req = sent(&c, HttpMethod::Post, "/unsubscribe/customer");
        assert_eq!(body(&req), json!({ "subscription_id": 77 }));
    }

    #[test]
    fn get_subscribers_defaults_to_limit_20() {
        let c = client();
        c.get_subscribers(&SubscriberListOptions::default()).unwrap();
        let req = sent(&c, HttpMethod::Get, "/subscribers");
        assert_eq!(query(&req), pairs(&[("limit", "20")]));
    }

    #[test]
    fn get_subscribers_random_order() {
        let c = client();
        let options = SubscriberListOptions {
            order: Some(SubscriberOrder::Rand),
            starting_after: Some(100),
            ..Default::default()
        };
        c.get_subscribers(&options).unwrap();
        let req = sent(&c, HttpMethod::Get, "/subscribers");
        assert_eq!(
            query(&req),
            pairs(&[("limit", "20"), ("order", "rand"), ("starting_after", "100")])
        );
    }
}
