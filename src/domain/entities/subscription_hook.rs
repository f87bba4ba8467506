use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Subscription lifecycle notifications the bridge listens to, named after
/// the store actions that raise them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
pub enum SubscriptionHook {
    #[strum(serialize = "woocommerce_checkout_subscription_created")]
    CheckoutCreated,
    #[strum(serialize = "woocommerce_subscription_status_active")]
    StatusActive,
    #[strum(serialize = "woocommerce_subscription_status_pending-cancel")]
    StatusPendingCancel,
    #[strum(serialize = "woocommerce_subscription_status_cancelled")]
    StatusCancelled,
    #[strum(serialize = "woocommerce_subscription_status_expired")]
    StatusExpired,
    #[strum(serialize = "woocommerce_subscription_status_on-hold")]
    StatusOnHold,
    #[strum(serialize = "woocommerce_scheduled_subscription_trial_end")]
    TrialEnded,
    #[strum(serialize = "woocommerce_scheduled_subscription_payment")]
    RenewalDue,
    #[strum(serialize = "woocommerce_subscription_renewal_payment_complete")]
    RenewalPaymentComplete,
    #[strum(serialize = "woocommerce_subscription_renewal_payment_failed")]
    RenewalPaymentFailed,
}

/// Where the `value` block of an event comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    None,
    /// Subscription currency/total, only when the latest order has a positive total.
    SubscriptionTotals,
    /// Latest order currency/total, whenever such an order exists.
    OrderTotals,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::None => "none",
            ValueSource::SubscriptionTotals => "subscription",
            ValueSource::OrderTotals => "order",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookSpec {
    pub hook: SubscriptionHook,
    pub event: &'static str,
    /// The notification carries a subscription id rather than the record.
    pub resolves_id: bool,
    pub unique_key: bool,
    pub value: ValueSource,
}

impl SubscriptionHook {
    pub const fn spec(self) -> HookSpec {
        use SubscriptionHook::*;

        let (event, resolves_id, unique_key, value) = match self {
            CheckoutCreated => ("$SubscriptionCreated", false, true, ValueSource::None),
            StatusActive => ("$SubscriptionActive", false, true, ValueSource::None),
            StatusPendingCancel => ("$SubscriptionPendingCancel", false, true, ValueSource::None),
            StatusCancelled => ("$SubscriptionCancelled", false, true, ValueSource::None),
            StatusExpired => ("$SubscriptionExpired", false, true, ValueSource::None),
            StatusOnHold => ("$SubscriptionOnHold", false, true, ValueSource::None),
            TrialEnded => ("$SubscriptionTrialEnded", true, false, ValueSource::None),
            RenewalDue => ("$SubscriptionRenewed", true, false, ValueSource::SubscriptionTotals),
            RenewalPaymentComplete => (
                "$SubscriptionRenewalPaymentComplete",
                false,
                true,
                ValueSource::OrderTotals,
            ),
            RenewalPaymentFailed => (
                "$SubscriptionRenewalPaymentFailed",
                false,
                false,
                ValueSource::OrderTotals,
            ),
        };

        HookSpec {
            hook: self,
            event,
            resolves_id,
            unique_key,
            value,
        }
    }

    pub const fn event_name(self) -> &'static str {
        self.spec().event
    }
}
