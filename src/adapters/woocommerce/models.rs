//! WooCommerce REST (v3) resource shapes and their mapping to domain entities.
//!
//! Webhook deliveries reuse the same JSON, so the HTTP routes decode these too.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use crate::{
    domain::entities::{
        order::{LineItem, Order, OrderId},
        subscription::{Subscription, SubscriptionId, SubscriptionStatus},
    },
};

/// Money and quantities arrive as strings (`"25.00"`) from REST and as
/// numbers from some extensions.
#[derive(Deserialize)]
#[serde(untagged)]
enum WcNumber {
    Text(String),
    Number(f64),
}

fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WcNumber>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(WcNumber::Number(n)) => Ok(n),
        Some(WcNumber::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(WcNumber::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn de_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = de_amount(deserializer)?;
    if quantity < 0.0 {
        return Err(serde::de::Error::custom("negative quantity"));
    }
    if quantity.fract() != 0.0 || quantity > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "quantity {} is not a whole number of items",
            quantity
        )));
    }
    Ok(quantity as u32)
}

/// The store reports 0 for "none" in id fields.
fn non_zero(id: u64) -> Option<u64> {
    (id > 0).then_some(id)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WcBilling {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WcLineItem {
    #[serde(default)]
    pub product_id: u64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de_quantity")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "de_amount")]
    pub total: f64,
}

impl From<WcLineItem> for LineItem {
    fn from(item: WcLineItem) -> Self {
        Self {
            product_id: item.product_id,
            sku: item.sku.filter(|s| !s.trim().is_empty()),
            name: item.name,
            quantity: item.quantity,
            total: item.total,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WcSubscription {
    pub id: u64,
    pub status: String,
    #[serde(default)]
    pub customer_id: u64,
    #[serde(default)]
    pub parent_id: u64,
    #[serde(default)]
    pub currency: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub total: f64,
    #[serde(default)]
    pub billing: WcBilling,
    #[serde(default)]
    pub line_items: Vec<WcLineItem>,
}

impl From<WcSubscription> for Subscription {
    fn from(wc: WcSubscription) -> Self {
        Subscription {
            id: SubscriptionId(wc.id),
            status: SubscriptionStatus::from_store(&wc.status),
            customer_id: non_zero(wc.customer_id),
            billing_email: wc.billing.email.unwrap_or_default(),
            currency: wc.currency,
            total: wc.total,
            parent_order_id: non_zero(wc.parent_id).map(OrderId),
            line_items: wc.line_items.into_iter().map(LineItem::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WcOrder {
    pub id: u64,
    #[serde(default)]
    pub order_key: String,
    #[serde(default)]
    pub customer_id: u64,
    #[serde(default)]
    pub currency: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub total: f64,
    /// Site-local timestamp without offset, e.g. `2025-01-15T09:30:00`.
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,
    #[serde(default)]
    pub line_items: Vec<WcLineItem>,
}

impl From<WcOrder> for Order {
    fn from(wc: WcOrder) -> Self {
        Order {
            id: OrderId(wc.id),
            order_key: wc.order_key,
            customer_id: non_zero(wc.customer_id),
            currency: wc.currency,
            total: wc.total,
            date_created: wc.date_created,
            line_items: wc.line_items.into_iter().map(LineItem::from).collect(),
        }
    }
}
