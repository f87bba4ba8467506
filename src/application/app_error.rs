use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("Unknown notification: {0}")]
    UnknownNotification(String),

    #[error("Store request failed: {0}")]
    Platform(String),

    #[error("Event delivery failed: {0}")]
    Delivery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    InvalidInput,
    InvalidSignature,
    UnknownNotification,
    PlatformError,
    DeliveryFailed,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidSignature => "INVALID_SIGNATURE",
            ErrorCode::UnknownNotification => "UNKNOWN_NOTIFICATION",
            ErrorCode::PlatformError => "PLATFORM_ERROR",
            ErrorCode::DeliveryFailed => "DELIVERY_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::InvalidSignature => ErrorCode::InvalidSignature,
            AppError::UnknownNotification(_) => ErrorCode::UnknownNotification,
            AppError::Platform(_) => ErrorCode::PlatformError,
            AppError::Delivery(_) => ErrorCode::DeliveryFailed,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
