//! Runtime orchestration and lifecycle management.
//!
//! - [`ShopSystem`] - Starts the inventory actor, wires the shopping service, shuts down
//! - [`ShopConfig`] - Runtime settings
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use config::*;
pub use shop_system::*;
pub use self::tracing::*;
