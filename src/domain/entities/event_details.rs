//! Event payload sent along with every subscription event.
//!
//! Shape:
//! `{ subscription: { id, status, order: { items } }, unique?: { key }, value?: { currency, amount } }`

use serde::Serialize;

use super::{
    order::{LineItem, Order},
    subscription::{Subscription, SubscriptionId, SubscriptionStatus},
};

/// Line-item summary as listed under `subscription.order.items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_sku: Option<String>,
    pub product_name: String,
    pub quantity: u32,
    pub line_total: f64,
}

impl From<&LineItem> for CartItem {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id,
            product_sku: item.sku.clone(),
            product_name: item.name.clone(),
            quantity: item.quantity,
            line_total: item.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetails {
    pub subscription: SubscriptionDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<UniqueKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<EventValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionDetails {
    pub id: SubscriptionId,
    pub status: SubscriptionStatus,
    pub order: OrderItems,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItems {
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniqueKey {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventValue {
    pub currency: String,
    pub amount: f64,
}

impl EventValue {
    pub fn from_subscription(subscription: &Subscription) -> Self {
        Self {
            currency: subscription.currency.clone(),
            amount: subscription.total,
        }
    }

    pub fn from_order(order: &Order) -> Self {
        Self {
            currency: order.currency.clone(),
            amount: order.total,
        }
    }
}

/// Builds the details payload for a subscription.
///
/// `unique.key` is only set when `include_unique` is true and the originating
/// checkout order is known. Renewal orders never supply the key, so retried
/// checkouts collapse into one logical event on the receiving side.
pub fn build_details(
    subscription: &Subscription,
    items: Vec<CartItem>,
    origin_order: Option<&Order>,
    include_unique: bool,
) -> EventDetails {
    let unique = origin_order
        .filter(|_| include_unique)
        .map(|order| UniqueKey {
            key: order.order_key.clone(),
        });

    EventDetails {
        subscription: SubscriptionDetails {
            id: subscription.id,
            status: subscription.status.clone(),
            order: OrderItems { items },
        },
        unique,
        value: None,
    }
}

impl EventDetails {
    pub fn with_value(self, value: Option<EventValue>) -> Self {
        Self { value, ..self }
    }
}
