//! # Cart Service
//!
//! > **Per-customer carts and a purchase transaction over a shared, live inventory.**
//!
//! A customer fills a [`Cart`](model::Cart) with products, then asks the
//! [`ShoppingService`](shopping::ShoppingService) to buy it. Buying walks the cart line by
//! line: validate, decrement the product's count, persist it through a
//! [`ProductStore`](store::ProductStore), drop the line from the cart.
//!
//! ## 🏗️ Design Notes
//!
//! ### 1. Products Are Identities, Not Names
//! Every [`Product`](model::Product) gets its own [`ProductId`](model::ProductId) when it is
//! built, and carts key their lines by it. Two products called "bread" are two lines.
//!
//! ### 2. Purchases Are Line-by-Line
//! `buy` is not all-or-nothing. It stops at the first line it cannot buy; lines bought
//! before that stay bought (and are gone from the cart), that line and the rest stay in the
//! cart untouched. If the store fails to persist a line, that line's decrement is rolled
//! back before the error is returned.
//!
//! ### 3. Concurrency Model
//! The [`CartRegistry`](shopping::CartRegistry) hands out one shared, async-locked cart per
//! customer (plus one anonymous cart). Counts are atomics that never go below zero, and the
//! subtract-and-persist step of each line runs under a single inventory-wide lock.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `Product`, `Customer`, `Cart`.
//! - [`shopping`]: the service, the cart registry and [`BuyError`](shopping::BuyError).
//! - [`store`]: the [`ProductStore`](store::ProductStore) contract and a
//!   [`mock`](store::mock) for tests.
//! - [`inventory_actor`]: an in-memory `ProductStore` running as a Tokio actor.
//! - [`lifecycle`]: [`ShopSystem`](lifecycle::ShopSystem), configuration and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod shopping;
pub mod store;
