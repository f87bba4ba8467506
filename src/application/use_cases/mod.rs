pub mod subscription_events;
