//! Test data factories. Each takes a closure to tweak the defaults.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::entities::{
    order::{LineItem, Order, OrderId},
    subscription::{Subscription, SubscriptionId, SubscriptionStatus},
};

fn test_timestamp() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 1, 15).and_then(|d| d.and_hms_opt(9, 30, 0))
}

pub fn create_test_line_item<F>(customize: F) -> LineItem
where
    F: FnOnce(&mut LineItem),
{
    let mut item = LineItem {
        product_id: 11,
        sku: Some("COFFEE-SUB".to_string()),
        name: "Coffee subscription".to_string(),
        quantity: 1,
        total: 25.0,
    };
    customize(&mut item);
    item
}

pub fn create_test_subscription<F>(customize: F) -> Subscription
where
    F: FnOnce(&mut Subscription),
{
    let mut subscription = Subscription {
        id: SubscriptionId(42),
        status: SubscriptionStatus::Active,
        customer_id: Some(7),
        billing_email: "customer@example.com".to_string(),
        currency: "USD".to_string(),
        total: 25.0,
        parent_order_id: Some(OrderId(100)),
        line_items: vec![create_test_line_item(|_| {})],
    };
    customize(&mut subscription);
    subscription
}

pub fn create_test_order<F>(customize: F) -> Order
where
    F: FnOnce(&mut Order),
{
    let mut order = Order {
        id: OrderId(100),
        order_key: "wc_order_abc".to_string(),
        customer_id: Some(7),
        currency: "USD".to_string(),
        total: 25.0,
        date_created: test_timestamp(),
        line_items: vec![create_test_line_item(|_| {})],
    };
    customize(&mut order);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_apply_customization() {
        let subscription = create_test_subscription(|s| s.status = SubscriptionStatus::OnHold);
        assert_eq!(subscription.status, SubscriptionStatus::OnHold);
        assert_eq!(subscription.billing_email, "customer@example.com");

        let order = create_test_order(|o| o.total = 0.0);
        assert_eq!(order.total, 0.0);
        assert_eq!(order.order_key, "wc_order_abc");
    }
}
