use crate::{
    adapters::{bento::BentoEventSender, http::app_state::AppState, woocommerce::WooCommerceClient},
    infra::{config::AppConfig, error::InfraError, http_client::try_build_client},
    ports::{event_sender::EventSender, subscription_platform::SubscriptionPlatform},
    use_cases::subscription_events::SubscriptionEventUseCases,
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "app.log";

pub fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env();

    let http = try_build_client()?;

    let platform = Arc::new(WooCommerceClient::new(
        http.clone(),
        config.wc_store_url.clone(),
        config.wc_consumer_key.clone(),
        config.wc_consumer_secret.clone(),
    )) as Arc<dyn SubscriptionPlatform>;

    let sender = Arc::new(BentoEventSender::new(
        http,
        config.bento_api_base.clone(),
        config.bento_site_uuid.clone(),
        config.bento_publishable_key.clone(),
        config.bento_secret_key.clone(),
    )) as Arc<dyn EventSender>;

    if config.wc_webhook_secret.is_none() {
        tracing::warn!("WC_WEBHOOK_SECRET not set, accepting unsigned webhooks");
    }

    let subscription_events = SubscriptionEventUseCases::new(platform, sender);

    Ok(AppState {
        config: Arc::new(config),
        subscription_events: Arc::new(subscription_events),
    })
}

pub fn init_tracing() -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bento_subscriptions=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs)
    let file = File::create(LOG_FILE).map_err(|source| InfraError::LogFile {
        path: LOG_FILE,
        source,
    })?;
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
