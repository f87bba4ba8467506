//! Builds an `AppState` around test doubles for route tests.

use secrecy::SecretString;
use std::sync::Arc;
use url::Url;

use crate::{
    adapters::{bento::DEFAULT_BENTO_API_BASE, http::app_state::AppState},
    application::ports::{event_sender::EventSender, subscription_platform::SubscriptionPlatform},
    infra::config::AppConfig,
    use_cases::subscription_events::SubscriptionEventUseCases,
};

pub const TEST_WEBHOOK_SECRET: &str = "wc_test_webhook_secret";

pub fn test_config(webhook_secret: Option<&str>) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        wc_store_url: Url::parse("https://shop.example.com").unwrap(),
        wc_consumer_key: "ck_test".to_string(),
        wc_consumer_secret: SecretString::new("cs_test".into()),
        wc_webhook_secret: webhook_secret.map(|s| SecretString::new(s.into())),
        bento_api_base: Url::parse(DEFAULT_BENTO_API_BASE).unwrap(),
        bento_site_uuid: "site-test".to_string(),
        bento_publishable_key: "pk_test".to_string(),
        bento_secret_key: SecretString::new("sk_test".into()),
    }
}

pub fn test_app_state(
    platform: Arc<dyn SubscriptionPlatform>,
    sender: Arc<dyn EventSender>,
    webhook_secret: Option<&str>,
) -> AppState {
    AppState {
        config: Arc::new(test_config(webhook_secret)),
        subscription_events: Arc::new(SubscriptionEventUseCases::new(platform, sender)),
    }
}
