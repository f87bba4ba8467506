pub mod event_details;
pub mod order;
pub mod subscription;
pub mod subscription_hook;
pub mod user_identity;
