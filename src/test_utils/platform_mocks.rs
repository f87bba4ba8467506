//! In-memory stand-ins for the store and the event backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{
        event_sender::{EventSender, OutboundEvent},
        subscription_platform::SubscriptionPlatform,
    },
    domain::entities::{
        event_details::CartItem,
        order::{Order, OrderId, most_recent_order},
        subscription::{Subscription, SubscriptionId},
        user_identity::UserIdentity,
    },
};

/// In-memory implementation of SubscriptionPlatform for testing.
#[derive(Default)]
pub struct InMemoryPlatform {
    pub subscriptions: Mutex<HashMap<SubscriptionId, Subscription>>,
    pub orders: Mutex<HashMap<OrderId, Order>>,
    pub related_orders: Mutex<HashMap<SubscriptionId, Vec<OrderId>>>,
    /// Every id passed to `get_order`, in call order.
    pub order_lookups: Mutex<Vec<OrderId>>,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscription(self, subscription: Subscription) -> Self {
        self.subscriptions
            .lock()
            .unwrap()
            .insert(subscription.id, subscription);
        self
    }

    pub fn with_order(self, order: Order) -> Self {
        self.orders.lock().unwrap().insert(order.id, order);
        self
    }

    pub fn with_related_orders(self, subscription_id: SubscriptionId, ids: Vec<OrderId>) -> Self {
        self.related_orders
            .lock()
            .unwrap()
            .insert(subscription_id, ids);
        self
    }

    pub fn order_lookups(&self) -> Vec<OrderId> {
        self.order_lookups.lock().unwrap().clone()
    }

    /// Snapshot of a stored subscription (for test assertions).
    pub fn subscription(&self, id: SubscriptionId) -> Option<Subscription> {
        self.subscriptions.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl SubscriptionPlatform for InMemoryPlatform {
    async fn get_subscription(&self, id: SubscriptionId) -> AppResult<Option<Subscription>> {
        Ok(self.subscription(id))
    }

    async fn get_order(&self, id: OrderId) -> AppResult<Option<Order>> {
        self.order_lookups.lock().unwrap().push(id);
        Ok(self.orders.lock().unwrap().get(&id).cloned())
    }

    async fn last_order(&self, subscription: &Subscription) -> AppResult<Option<Order>> {
        let ids = self
            .related_orders
            .lock()
            .unwrap()
            .get(&subscription.id)
            .cloned()
            .unwrap_or_default();
        let orders = self.orders.lock().unwrap();
        let related = ids
            .iter()
            .filter_map(|id| orders.get(id).cloned())
            .collect();
        Ok(most_recent_order(related))
    }

    async fn resolve_user(
        &self,
        subscription: &Subscription,
        checkout_order: Option<&Order>,
    ) -> AppResult<UserIdentity> {
        let customer_id = subscription
            .customer_id
            .or_else(|| checkout_order.and_then(|order| order.customer_id));
        Ok(UserIdentity::from_customer_id(customer_id))
    }

    async fn cart_items(&self, subscription: &Subscription) -> AppResult<Vec<CartItem>> {
        Ok(subscription.line_items.iter().map(CartItem::from).collect())
    }
}

/// Records every event it is asked to send.
#[derive(Default)]
pub struct RecordingEventSender {
    pub sent: Mutex<Vec<OutboundEvent>>,
}

impl RecordingEventSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OutboundEvent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSender for RecordingEventSender {
    async fn send_event(&self, event: &OutboundEvent) -> AppResult<()> {
        self.sent.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Rejects every delivery.
pub struct FailingEventSender;

#[async_trait]
impl EventSender for FailingEventSender {
    async fn send_event(&self, _event: &OutboundEvent) -> AppResult<()> {
        Err(AppError::Delivery("backend unavailable".into()))
    }
}
