//! Subscription platform backed by the WooCommerce REST API.

pub mod models;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::subscription_platform::SubscriptionPlatform,
    infra::http_client::with_trailing_slash,
    domain::entities::{
        event_details::CartItem,
        order::{Order, OrderId, most_recent_order},
        subscription::{Subscription, SubscriptionId},
        user_identity::UserIdentity,
    },
};

use models::{WcOrder, WcSubscription};

const REST_PREFIX: &str = "wp-json/wc/v3/";

#[derive(Clone)]
pub struct WooCommerceClient {
    client: Client,
    base_url: Url,
    consumer_key: String,
    consumer_secret: SecretString,
}

impl WooCommerceClient {
    pub fn new(
        client: Client,
        store_url: Url,
        consumer_key: String,
        consumer_secret: SecretString,
    ) -> Self {
        Self {
            client,
            base_url: with_trailing_slash(store_url),
            consumer_key,
            consumer_secret,
        }
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(REST_PREFIX)
            .and_then(|rest| rest.join(path))
            .map_err(|e| AppError::Internal(format!("Invalid store URL: {}", e)))
    }

    /// GET a REST resource; 404 maps to `None`.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> AppResult<Option<T>> {
        let url = self.endpoint(path)?;
        debug!(%url, "Fetching store resource");

        let response = self
            .client
            .get(url)
            .basic_auth(&self.consumer_key, Some(self.consumer_secret.expose_secret()))
            .send()
            .await
            .map_err(|e| AppError::Platform(format!("Store request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Platform(format!("Failed to read store response: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::Platform(format!(
                "Store returned {} for {}: {}",
                status, path, body
            )));
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| AppError::Platform(format!("Unexpected store response for {}: {}", path, e)))
    }
}

#[async_trait]
impl SubscriptionPlatform for WooCommerceClient {
    async fn get_subscription(&self, id: SubscriptionId) -> AppResult<Option<Subscription>> {
        Ok(self
            .get_optional::<WcSubscription>(&format!("subscriptions/{}", id))
            .await?
            .map(Subscription::from))
    }

    async fn get_order(&self, id: OrderId) -> AppResult<Option<Order>> {
        Ok(self
            .get_optional::<WcOrder>(&format!("orders/{}", id))
            .await?
            .map(Order::from))
    }

    async fn last_order(&self, subscription: &Subscription) -> AppResult<Option<Order>> {
        let orders = self
            .get_optional::<Vec<WcOrder>>(&format!("subscriptions/{}/orders", subscription.id))
            .await?
            .unwrap_or_default();

        Ok(most_recent_order(orders.into_iter().map(Order::from).collect()))
    }

    async fn resolve_user(
        &self,
        subscription: &Subscription,
        checkout_order: Option<&Order>,
    ) -> AppResult<UserIdentity> {
        // Subscriptions created by admins can lack a customer while the
        // checkout order still has one.
        let customer_id = subscription
            .customer_id
            .or_else(|| checkout_order.and_then(|order| order.customer_id));

        Ok(UserIdentity::from_customer_id(customer_id))
    }

    async fn cart_items(&self, subscription: &Subscription) -> AppResult<Vec<CartItem>> {
        Ok(subscription.line_items.iter().map(CartItem::from).collect())
    }
}
