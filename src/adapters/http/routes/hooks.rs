//! Webhook endpoints the store posts subscription notifications to.
//!
//! `POST /api/hooks/{notification}` where `{notification}` is the store action
//! name, e.g. `woocommerce_subscription_status_cancelled`. The body is one of:
//! - the subscription resource as the store serializes it,
//! - `{"subscription": {...}, "order_id": 123}`,
//! - `{"subscription_id": 42, "order_id": 123}` for scheduled actions that
//!   only know the id.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use strum::IntoEnumIterator;
use tracing::info;

use crate::{
    adapters::{http::app_state::AppState, woocommerce::models::WcSubscription},
    app_error::{AppError, AppResult},
    domain::entities::{
        order::OrderId,
        subscription::{Subscription, SubscriptionId},
        subscription_hook::SubscriptionHook,
    },
    infra::webhook_signature::{SIGNATURE_HEADER, verify_webhook_signature},
    use_cases::subscription_events::Notification,
};

/// The store pings a freshly saved webhook with a form body `webhook_id=N`.
const PING_PREFIX: &[u8] = b"webhook_id=";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HookBody {
    Reference {
        subscription_id: u64,
        #[serde(default)]
        order_id: Option<u64>,
    },
    Envelope {
        subscription: WcSubscription,
        #[serde(default)]
        order_id: Option<u64>,
    },
    Record(WcSubscription),
}

impl HookBody {
    fn into_notification(self, hook: SubscriptionHook) -> Notification {
        match self {
            HookBody::Reference {
                subscription_id,
                order_id,
            } => Notification::for_id(hook, SubscriptionId(subscription_id))
                .with_order(order_id.map(OrderId)),
            HookBody::Envelope {
                subscription,
                order_id,
            } => Notification::for_record(hook, Subscription::from(subscription))
                .with_order(order_id.map(OrderId)),
            HookBody::Record(subscription) => {
                Notification::for_record(hook, Subscription::from(subscription))
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct HookInfo {
    notification: String,
    event: &'static str,
    resolves_id: bool,
    unique_key: bool,
    value: &'static str,
}

/// GET /api/hooks
async fn list_hooks() -> Json<Vec<HookInfo>> {
    let hooks = SubscriptionHook::iter()
        .map(|hook| {
            let spec = hook.spec();
            HookInfo {
                notification: hook.to_string(),
                event: spec.event,
                resolves_id: spec.resolves_id,
                unique_key: spec.unique_key,
                value: spec.value.as_str(),
            }
        })
        .collect();
    Json(hooks)
}

fn verify_signature(app_state: &AppState, headers: &HeaderMap, body: &[u8]) -> AppResult<()> {
    let Some(secret) = &app_state.config.wc_webhook_secret else {
        return Ok(());
    };

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidSignature)?;

    verify_webhook_signature(secret.expose_secret(), body, signature)
}

/// POST /api/hooks/{notification}
async fn receive_hook(
    State(app_state): State<AppState>,
    Path(notification): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Response> {
    verify_signature(&app_state, &headers, &body)?;

    let hook: SubscriptionHook = notification
        .parse()
        .map_err(|_| AppError::UnknownNotification(notification.clone()))?;

    if body.starts_with(PING_PREFIX) {
        info!(%hook, "Webhook ping received");
        return Ok(Json(json!({ "status": "pong" })).into_response());
    }

    let body: HookBody = serde_json::from_slice(&body).map_err(|e| {
        AppError::InvalidInput(format!("Unrecognized notification body: {}", e))
    })?;

    let outcome = app_state
        .subscription_events
        .dispatch(body.into_notification(hook))
        .await?;

    Ok(Json(outcome).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_hooks))
        .route("/{notification}", post(receive_hook))
}
