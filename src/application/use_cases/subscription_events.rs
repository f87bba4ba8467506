use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    app_error::AppResult,
    application::ports::{
        event_sender::{EventSender, OutboundEvent},
        subscription_platform::SubscriptionPlatform,
    },
    domain::entities::{
        event_details::{EventValue, build_details},
        order::{Order, OrderId},
        subscription::{Subscription, SubscriptionId},
        subscription_hook::{HookSpec, SubscriptionHook, ValueSource},
    },
};

/// What the store handed over with the notification.
#[derive(Debug, Clone)]
pub enum SubscriptionRef {
    Record(Box<Subscription>),
    Id(SubscriptionId),
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub hook: SubscriptionHook,
    pub subscription: SubscriptionRef,
    /// Order attached to payment notifications. When absent the
    /// subscription's latest order is looked up instead.
    pub order_id: Option<OrderId>,
}

impl Notification {
    pub fn for_record(hook: SubscriptionHook, subscription: Subscription) -> Self {
        Self {
            hook,
            subscription: SubscriptionRef::Record(Box::new(subscription)),
            order_id: None,
        }
    }

    pub fn for_id(hook: SubscriptionHook, id: SubscriptionId) -> Self {
        Self {
            hook,
            subscription: SubscriptionRef::Id(id),
            order_id: None,
        }
    }

    pub fn with_order(self, order_id: Option<OrderId>) -> Self {
        Self { order_id, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Sent { event: &'static str },
    Skipped { reason: String },
}

#[derive(Clone)]
pub struct SubscriptionEventUseCases {
    platform: Arc<dyn SubscriptionPlatform>,
    sender: Arc<dyn EventSender>,
}

impl SubscriptionEventUseCases {
    pub fn new(platform: Arc<dyn SubscriptionPlatform>, sender: Arc<dyn EventSender>) -> Self {
        Self { platform, sender }
    }

    /// Translate one store notification into at most one outbound event.
    #[instrument(skip(self, notification), fields(hook = %notification.hook))]
    pub async fn dispatch(&self, notification: Notification) -> AppResult<DispatchOutcome> {
        let spec = notification.hook.spec();

        let subscription = match notification.subscription {
            SubscriptionRef::Record(subscription) => *subscription,
            SubscriptionRef::Id(id) => match self.platform.get_subscription(id).await? {
                Some(subscription) => subscription,
                None => {
                    warn!(
                        subscription_id = %id,
                        event = spec.event,
                        "Subscription not found, skipping event"
                    );
                    return Ok(DispatchOutcome::Skipped {
                        reason: format!("subscription {} not found", id),
                    });
                }
            },
        };

        if subscription.billing_email.trim().is_empty() {
            warn!(
                subscription_id = %subscription.id,
                event = spec.event,
                "Subscription has no billing email, skipping event"
            );
            return Ok(DispatchOutcome::Skipped {
                reason: format!("subscription {} has no billing email", subscription.id),
            });
        }

        let event = self
            .build_event(&spec, &subscription, notification.order_id)
            .await?;

        self.sender.send_event(&event).await?;

        info!(
            subscription_id = %subscription.id,
            event = spec.event,
            user = %event.user,
            has_value = event.details.value.is_some(),
            "Subscription event sent"
        );

        Ok(DispatchOutcome::Sent { event: spec.event })
    }

    async fn build_event(
        &self,
        spec: &HookSpec,
        subscription: &Subscription,
        order_id: Option<OrderId>,
    ) -> AppResult<OutboundEvent> {
        // The checkout order supplies the unique key and, for subscriptions
        // without a customer, the user. Fetched at most once.
        let needs_checkout = spec.unique_key || subscription.customer_id.is_none();
        let checkout_order = match (needs_checkout, subscription.parent_order_id) {
            (true, Some(parent_id)) => self.platform.get_order(parent_id).await?,
            _ => None,
        };

        let user = self
            .platform
            .resolve_user(subscription, checkout_order.as_ref())
            .await?;
        let items = self.platform.cart_items(subscription).await?;

        let value = self.resolve_value(spec.value, subscription, order_id).await?;

        let details =
            build_details(subscription, items, checkout_order.as_ref(), spec.unique_key)
                .with_value(value);

        Ok(OutboundEvent {
            user,
            event_type: spec.event,
            email: subscription.billing_email.clone(),
            details,
        })
    }

    async fn resolve_value(
        &self,
        source: ValueSource,
        subscription: &Subscription,
        order_id: Option<OrderId>,
    ) -> AppResult<Option<EventValue>> {
        if source == ValueSource::None {
            return Ok(None);
        }

        let order = self.payment_order(subscription, order_id).await?;

        Ok(match (source, order) {
            // Renewal-due reports what the subscription will charge, gated on
            // the latest order having been a paid one.
            (ValueSource::SubscriptionTotals, Some(order)) if order.total > 0.0 => {
                Some(EventValue::from_subscription(subscription))
            }
            (ValueSource::OrderTotals, Some(order)) => Some(EventValue::from_order(&order)),
            _ => None,
        })
    }

    async fn payment_order(
        &self,
        subscription: &Subscription,
        order_id: Option<OrderId>,
    ) -> AppResult<Option<Order>> {
        match order_id {
            Some(id) => self.platform.get_order(id).await,
            None => self.platform.last_order(subscription).await,
        }
    }
}
