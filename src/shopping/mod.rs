//! Carts per customer and the purchase transaction.
//!
//! # Main Components
//!
//! - [`ShoppingService`] - Cart lookup, catalog delegation and [`buy`](ShoppingService::buy)
//! - [`CartRegistry`] - Customer identity to [`SharedCart`]
//! - [`BuyError`] - Why a purchase stopped

pub mod error;
pub mod registry;
pub mod service;

pub use error::*;
pub use registry::*;
pub use service::*;
