//! Event sender for the Bento batch events API.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::ports::event_sender::{EventSender, OutboundEvent},
    domain::entities::event_details::EventDetails,
    infra::http_client::with_trailing_slash,
};

pub const DEFAULT_BENTO_API_BASE: &str = "https://app.bentonow.com/api/v1/";

#[derive(Clone)]
pub struct BentoEventSender {
    client: Client,
    api_base: Url,
    site_uuid: String,
    publishable_key: String,
    secret_key: SecretString,
}

impl BentoEventSender {
    pub fn new(
        client: Client,
        api_base: Url,
        site_uuid: String,
        publishable_key: String,
        secret_key: SecretString,
    ) -> Self {
        Self {
            client,
            api_base: with_trailing_slash(api_base),
            site_uuid,
            publishable_key,
            secret_key,
        }
    }

    fn events_url(&self) -> AppResult<Url> {
        let mut url = self
            .api_base
            .join("batch/events")
            .map_err(|e| AppError::Internal(format!("Invalid Bento API base: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("site_uuid", &self.site_uuid);
        Ok(url)
    }
}

#[derive(Serialize)]
struct BatchEventsReq<'a> {
    events: [BentoEvent<'a>; 1],
}

#[derive(Serialize)]
struct BentoEvent<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    email: &'a str,
    details: &'a EventDetails,
}

#[derive(Deserialize)]
struct BatchEventsResp {
    #[serde(default)]
    results: u64,
    #[serde(default)]
    failed: u64,
}

#[async_trait]
impl EventSender for BentoEventSender {
    #[instrument(skip(self, event), fields(event = event.event_type, user = %event.user))]
    async fn send_event(&self, event: &OutboundEvent) -> AppResult<()> {
        let body = BatchEventsReq {
            events: [BentoEvent {
                event_type: event.event_type,
                email: &event.email,
                details: &event.details,
            }],
        };

        let response = self
            .client
            .post(self.events_url()?)
            .basic_auth(&self.publishable_key, Some(self.secret_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Delivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Delivery(e.to_string()))?;

        let result: BatchEventsResp = response
            .json()
            .await
            .map_err(|e| AppError::Delivery(format!("Unexpected Bento response: {}", e)))?;

        if result.failed > 0 {
            return Err(AppError::Delivery(format!(
                "Bento rejected {} of {} events",
                result.failed,
                result.failed + result.results
            )));
        }

        debug!(results = result.results, "Bento accepted event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::entities::{event_details::build_details, user_identity::UserIdentity},
        test_utils::create_test_subscription,
    };
    use axum::{
        Json, Router,
        extract::{Query, State},
        http::HeaderMap,
        routing::post,
    };
    use serde_json::{Value, json};
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct FakeBento {
        requests: Arc<Mutex<Vec<(HashMap<String, String>, Option<String>, Value)>>>,
        reject: bool,
    }

    async fn batch_events(
        State(fake): State<FakeBento>,
        Query(query): Query<HashMap<String, String>>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        fake.requests.lock().unwrap().push((query, auth, body));

        if fake.reject {
            Json(json!({ "results": 0, "failed": 1 }))
        } else {
            Json(json!({ "results": 1, "failed": 0 }))
        }
    }

    async fn spawn_bento(fake: FakeBento) -> BentoEventSender {
        let app = Router::new()
            .route("/api/v1/batch/events", post(batch_events))
            .with_state(fake);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        BentoEventSender::new(
            Client::new(),
            Url::parse(&format!("http://{}/api/v1/", addr)).unwrap(),
            "site-123".into(),
            "pk_test".into(),
            SecretString::new("sk_test".into()),
        )
    }

    fn sample_event() -> OutboundEvent {
        let subscription = create_test_subscription(|_| {});
        OutboundEvent {
            user: UserIdentity::Customer(7),
            event_type: "$SubscriptionActive",
            email: "customer@example.com".into(),
            details: build_details(&subscription, vec![], None, false),
        }
    }

    #[tokio::test]
    async fn test_send_event_posts_batch() {
        let fake = FakeBento::default();
        let sender = spawn_bento(fake.clone()).await;

        sender.send_event(&sample_event()).await.unwrap();

        let requests = fake.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);

        let (query, auth, body) = &requests[0];
        assert_eq!(query.get("site_uuid").map(String::as_str), Some("site-123"));
        assert!(auth.as_deref().unwrap_or_default().starts_with("Basic "));
        assert_eq!(body["events"][0]["type"], json!("$SubscriptionActive"));
        assert_eq!(body["events"][0]["email"], json!("customer@example.com"));
        assert_eq!(body["events"][0]["details"]["subscription"]["id"], json!(42));
    }

    #[tokio::test]
    async fn test_failed_count_is_delivery_error() {
        let fake = FakeBento {
            reject: true,
            ..Default::default()
        };
        let sender = spawn_bento(fake).await;

        let result = sender.send_event(&sample_event()).await;

        assert!(matches!(result, Err(AppError::Delivery(_))));
    }

    #[tokio::test]
    async fn test_http_error_is_delivery_error() {
        let sender = BentoEventSender::new(
            Client::new(),
            Url::parse("http://127.0.0.1:9/api/v1/").unwrap(),
            "site-123".into(),
            "pk_test".into(),
            SecretString::new("sk_test".into()),
        );

        let result = sender.send_event(&sample_event()).await;

        assert!(matches!(result, Err(AppError::Delivery(_))));
    }

    #[test]
    fn test_events_url_carries_site_uuid() {
        let sender = BentoEventSender::new(
            Client::new(),
            Url::parse(DEFAULT_BENTO_API_BASE).unwrap(),
            "abc".into(),
            "pk".into(),
            SecretString::new("sk".into()),
        );

        assert_eq!(
            sender.events_url().unwrap().as_str(),
            "https://app.bentonow.com/api/v1/batch/events?site_uuid=abc"
        );
    }
}
