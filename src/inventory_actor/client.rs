//! # Inventory Client
//!
//! Provides a high-level API for interacting with the [`InventoryActor`](super::InventoryActor)
//! and implements [`ProductStore`] on top of it.

use super::actor::InventoryRequest;
use crate::model::{ProductId, ProductRef};
use crate::store::{ProductStore, StoreError};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> InventoryRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Registers a new named product in the catalog and returns its shared handle.
    #[instrument(skip(self, name))]
    pub async fn add_product(
        &self,
        name: impl Into<String>,
        count: u32,
    ) -> Result<ProductRef, StoreError> {
        let name = name.into();
        debug!(%name, "Sending request");
        self.request(|respond_to| InventoryRequest::AddProduct {
            name: Some(name),
            count,
            respond_to,
        })
        .await
    }

    /// The count recorded by the last save of `id`, or `None` for an unknown product.
    #[instrument(skip(self))]
    pub async fn persisted_count(&self, id: ProductId) -> Result<Option<u32>, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| InventoryRequest::PersistedCount { id, respond_to })
            .await
    }

    /// Number of successful saves handled by the actor.
    pub async fn save_count(&self) -> Result<u64, StoreError> {
        self.request(|respond_to| InventoryRequest::SaveCount { respond_to })
            .await
    }
}

#[async_trait]
impl ProductStore for InventoryClient {
    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<ProductRef>, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| InventoryRequest::GetAll { respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> Result<Vec<ProductRef>, StoreError> {
        debug!("Sending request");
        let name = name.to_string();
        self.request(|respond_to| InventoryRequest::GetByName { name, respond_to })
            .await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn save(&self, product: &ProductRef) -> Result<(), StoreError> {
        debug!(count = product.count(), "Sending request");
        let product = ProductRef::clone(product);
        self.request(|respond_to| InventoryRequest::Save {
            product,
            respond_to,
        })
        .await
    }
}
