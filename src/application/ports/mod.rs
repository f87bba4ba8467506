pub mod event_sender;
pub mod subscription_platform;
