//! The product store contract consumed by the shopping service.
//!
//! # Main Components
//!
//! - [`ProductStore`] - Lookup-all, lookup-by-name and persist-one
//! - [`StoreError`] - Failures a store may report
//!
//! The production implementation is the
//! [`InventoryClient`](crate::inventory_actor::InventoryClient). See [`mock`] for a test
//! double that counts calls and scripts failures.

pub mod mock;

use crate::model::ProductRef;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to a product store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The product could not be written.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// The store's actor is no longer accepting requests.
    #[error("Inventory actor closed")]
    ActorClosed,

    /// The store's actor dropped the response channel.
    #[error("Inventory actor dropped response channel")]
    ActorDropped,
}

/// Catalog and persistence operations the shopping service relies on.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Every product in the catalog.
    async fn get_all(&self) -> Result<Vec<ProductRef>, StoreError>;

    /// Products whose name is exactly `name`. May be empty.
    async fn get_by_name(&self, name: &str) -> Result<Vec<ProductRef>, StoreError>;

    /// Persists the current state of `product`.
    async fn save(&self, product: &ProductRef) -> Result<(), StoreError>;
}
