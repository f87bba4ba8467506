use async_trait::async_trait;
use serde::Serialize;

use crate::{
    app_error::AppResult,
    domain::entities::{event_details::EventDetails, user_identity::UserIdentity},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEvent {
    pub user: UserIdentity,
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub email: String,
    pub details: EventDetails,
}

/// Delivers events to the marketing-automation backend. Retries, if any,
/// are the implementation's business.
#[async_trait]
pub trait EventSender: Send + Sync {
    async fn send_event(&self, event: &OutboundEvent) -> AppResult<()>;
}
