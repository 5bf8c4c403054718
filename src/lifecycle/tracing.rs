//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. Levels are
//! controlled with `RUST_LOG`:
//!
//! ```bash
//! # Purchases, saves and actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Also every store request and cart creation
//! RUST_LOG=debug cargo run
//!
//! # Only the purchase transaction
//! RUST_LOG=cart_service::shopping=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` with the final catalog size
//! - **Store Requests**: `GetAll`, `GetByName`, `Saved` with `product_id` and `count`
//! - **Purchases**: a `buy` span carrying `customer_id` and `lines`, one `Line bought`
//!   event per line with `requested` and `remaining`, and a `Purchase aborted` warning
//!   naming the failing line
//!
//! With `RUST_LOG=info` a two-line purchase reads roughly:
//!
//! ```text
//! INFO Saved product_id=product_1 count=1
//! INFO buy: Line bought product_id=product_1 name="bread" requested=1 remaining=1 customer_id=customer_1 lines=2
//! INFO Saved product_id=product_2 count=1
//! INFO buy: Line bought product_id=product_2 name="Snickers" requested=3 remaining=1 customer_id=customer_1 lines=2
//! INFO buy: Purchase complete customer_id=customer_1 lines=2
//! ```
//!
//! `Saved` is logged by the inventory actor's own task, so it carries no `buy` span.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
