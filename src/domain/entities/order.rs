use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: u64,
    pub sku: Option<String>,
    pub name: String,
    pub quantity: u32,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Store-generated `wc_order_…` token, unique per order.
    pub order_key: String,
    pub customer_id: Option<u64>,
    pub currency: String,
    pub total: f64,
    pub date_created: Option<NaiveDateTime>,
    pub line_items: Vec<LineItem>,
}

/// Picks the newest order by creation time, falling back to the highest id
/// when timestamps tie or are missing.
pub fn most_recent_order(orders: Vec<Order>) -> Option<Order> {
    orders
        .into_iter()
        .max_by_key(|order| (order.date_created, order.id.0))
}
