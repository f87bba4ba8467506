use async_trait::async_trait;

use crate::{
    app_error::AppResult,
    domain::entities::{
        event_details::CartItem,
        order::{Order, OrderId},
        subscription::{Subscription, SubscriptionId},
        user_identity::UserIdentity,
    },
};

/// Read-only access to the subscription store.
///
/// Lookups return `Ok(None)` when the store has no such record; `Err` is
/// reserved for transport or decoding failures.
#[async_trait]
pub trait SubscriptionPlatform: Send + Sync {
    async fn get_subscription(&self, id: SubscriptionId) -> AppResult<Option<Subscription>>;

    async fn get_order(&self, id: OrderId) -> AppResult<Option<Order>>;

    /// Most recent order related to the subscription (parent or renewal).
    async fn last_order(&self, subscription: &Subscription) -> AppResult<Option<Order>>;

    /// Account linked to the subscription, falling back to its checkout
    /// order when the caller has already fetched it; otherwise guest.
    async fn resolve_user(
        &self,
        subscription: &Subscription,
        checkout_order: Option<&Order>,
    ) -> AppResult<UserIdentity>;

    async fn cart_items(&self, subscription: &Subscription) -> AppResult<Vec<CartItem>>;
}
