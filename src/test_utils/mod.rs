//! Test utilities.
//!
//! This module provides:
//! - Factories for subscriptions, orders and line items
//! - An in-memory store standing in for the subscription platform
//! - Event senders that record or reject deliveries
//! - An `AppState` builder for route tests

mod app_state_builder;
mod factories;
mod platform_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use platform_mocks::*;
