use std::net::SocketAddr;

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

use crate::adapters::bento::DEFAULT_BENTO_API_BASE;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Store root, e.g. `https://shop.example.com`. REST paths are appended.
    pub wc_store_url: Url,
    pub wc_consumer_key: String,
    pub wc_consumer_secret: SecretString,
    /// Secret configured on the store's webhooks. When unset, deliveries are
    /// accepted unsigned. Only leave it unset when the bridge is not reachable
    /// from the internet.
    pub wc_webhook_secret: Option<SecretString>,
    pub bento_api_base: Url,
    pub bento_site_uuid: String,
    pub bento_publishable_key: String,
    pub bento_secret_key: SecretString,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3002)));

        let wc_store_url: Url = get_env("WC_STORE_URL");
        let wc_consumer_key: String = get_env("WC_CONSUMER_KEY");
        let wc_consumer_secret = SecretString::new(get_env::<String>("WC_CONSUMER_SECRET").into());
        let wc_webhook_secret = std::env::var("WC_WEBHOOK_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| SecretString::new(s.into()));

        let bento_api_base: Url = get_env_default(
            "BENTO_API_BASE",
            Url::parse(DEFAULT_BENTO_API_BASE).expect("default Bento API base is a valid URL"),
        );
        let bento_site_uuid: String = get_env("BENTO_SITE_UUID");
        let bento_publishable_key: String = get_env("BENTO_PUBLISHABLE_KEY");
        let bento_secret_key = SecretString::new(get_env::<String>("BENTO_SECRET_KEY").into());

        Self {
            bind_addr,
            wc_store_url,
            wc_consumer_key,
            wc_consumer_secret,
            wc_webhook_secret,
            bento_api_base,
            bento_site_uuid,
            bento_publishable_key,
            bento_secret_key,
        }
    }
}
