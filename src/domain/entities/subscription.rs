use serde::{Deserialize, Serialize, Serializer};
use strum::EnumString;

use super::order::{LineItem, OrderId};

/// Subscription identifier as assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(pub u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subscription status in the store's spelling. Extensions can register
/// their own statuses, which are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SubscriptionStatus {
    Pending,
    Active,
    OnHold,
    PendingCancel,
    Cancelled,
    Expired,
    Switched,
    #[strum(default)]
    Other(String),
}

impl SubscriptionStatus {
    /// Parse a status as reported by the store. Post statuses carry a `wc-`
    /// prefix (`wc-on-hold`), REST responses don't.
    pub fn from_store(s: &str) -> Self {
        let s = s.trim();
        let s = s.strip_prefix("wc-").unwrap_or(s);
        match s.parse() {
            Ok(status) => status,
            Err(_) => SubscriptionStatus::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionStatus::Pending => "pending",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::OnHold => "on-hold",
            SubscriptionStatus::PendingCancel => "pending-cancel",
            SubscriptionStatus::Cancelled => "cancelled",
            SubscriptionStatus::Expired => "expired",
            SubscriptionStatus::Switched => "switched",
            SubscriptionStatus::Other(status) => status,
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SubscriptionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub status: SubscriptionStatus,
    /// `None` for guest checkouts.
    pub customer_id: Option<u64>,
    pub billing_email: String,
    pub currency: String,
    pub total: f64,
    /// The checkout order that created the subscription.
    pub parent_order_id: Option<OrderId>,
    pub line_items: Vec<LineItem>,
}
