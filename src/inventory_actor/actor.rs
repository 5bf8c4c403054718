//! # Inventory Actor
//!
//! The server half of the in-memory product store.
//!
//! ## Key Types
//!
//! - [`InventoryRequest`]: The messages the actor understands.
//! - [`InventoryActor`]: Owns the catalog and the persisted counts.
//!
//! **Concurrency Model**:
//! The actor processes its messages *sequentially* in a loop, so the catalog and the
//! persisted snapshot need no `Mutex`. Product counts are shared with carts through
//! [`ProductRef`] and mutated by the shopping service; the actor only records what was
//! saved.

use crate::model::{Product, ProductId, ProductRef};
use crate::store::StoreError;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::InventoryClient;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Message type sent to the actor to request operations.
#[derive(Debug)]
pub enum InventoryRequest {
    /// Register a new product in the catalog.
    AddProduct {
        name: Option<String>,
        count: u32,
        respond_to: Response<ProductRef>,
    },
    GetAll {
        respond_to: Response<Vec<ProductRef>>,
    },
    GetByName {
        name: String,
        respond_to: Response<Vec<ProductRef>>,
    },
    /// Record the product's current count. Unknown products are added to the catalog.
    Save {
        product: ProductRef,
        respond_to: Response<()>,
    },
    PersistedCount {
        id: ProductId,
        respond_to: Response<Option<u32>>,
    },
    SaveCount {
        respond_to: Response<u64>,
    },
}

/// The actor that owns the product catalog.
pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    catalog: BTreeMap<ProductId, ProductRef>,
    persisted: HashMap<ProductId, u32>,
    saves: u64,
}

impl InventoryActor {
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            catalog: BTreeMap::new(),
            persisted: HashMap::new(),
            saves: 0,
        };
        (actor, InventoryClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        info!("Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::AddProduct {
                    name,
                    count,
                    respond_to,
                } => {
                    let product: ProductRef = Arc::new(Product::with_optional_name(name, count));
                    self.catalog.insert(product.id(), Arc::clone(&product));
                    self.persisted.insert(product.id(), count);
                    info!(
                        product_id = %product.id(),
                        name = product.display_name(),
                        count,
                        size = self.catalog.len(),
                        "Added"
                    );
                    let _ = respond_to.send(Ok(product));
                }
                InventoryRequest::GetAll { respond_to } => {
                    let products: Vec<ProductRef> = self.catalog.values().cloned().collect();
                    debug!(size = products.len(), "GetAll");
                    let _ = respond_to.send(Ok(products));
                }
                InventoryRequest::GetByName { name, respond_to } => {
                    let matches: Vec<ProductRef> = self
                        .catalog
                        .values()
                        .filter(|product| product.name() == Some(name.as_str()))
                        .cloned()
                        .collect();
                    debug!(%name, found = matches.len(), "GetByName");
                    let _ = respond_to.send(Ok(matches));
                }
                InventoryRequest::Save {
                    product,
                    respond_to,
                } => {
                    let id = product.id();
                    let count = product.count();
                    self.catalog
                        .entry(id)
                        .or_insert_with(|| Arc::clone(&product));
                    self.persisted.insert(id, count);
                    self.saves += 1;
                    info!(product_id = %id, count, "Saved");
                    let _ = respond_to.send(Ok(()));
                }
                InventoryRequest::PersistedCount { id, respond_to } => {
                    let count = self.persisted.get(&id).copied();
                    debug!(product_id = %id, ?count, "PersistedCount");
                    let _ = respond_to.send(Ok(count));
                }
                InventoryRequest::SaveCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.saves));
                }
            }
        }

        info!(size = self.catalog.len(), saves = self.saves, "Shutdown");
    }
}
