use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidSignature => {
                (StatusCode::UNAUTHORIZED, "Invalid webhook signature".to_string())
            }
            AppError::UnknownNotification(name) => {
                (StatusCode::NOT_FOUND, format!("Unknown notification: {}", name))
            }
            // Upstream failures: a non-2xx makes the store log the delivery
            // as failed and retry it on its own schedule.
            AppError::Platform(_) => (StatusCode::BAD_GATEWAY, "Store request failed".to_string()),
            AppError::Delivery(_) => (StatusCode::BAD_GATEWAY, "Event delivery failed".to_string()),
            AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code = code.as_str(), "Request failed");
        } else {
            tracing::warn!(error = %self, code = code.as_str(), "Request rejected");
        }

        (
            status,
            Json(serde_json::json!({ "code": code.as_str(), "message": message })),
        )
            .into_response()
    }
}
