use std::sync::Arc;

use crate::{infra::config::AppConfig, use_cases::subscription_events::SubscriptionEventUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub subscription_events: Arc<SubscriptionEventUseCases>,
}
