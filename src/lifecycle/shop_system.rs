use super::ShopConfig;
use crate::inventory_actor::InventoryClient;
use crate::shopping::ShoppingService;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while stopping a [`ShopSystem`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
}

/// The runtime orchestrator for the shop.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the inventory actor
/// - **Dependency Wiring**: Handing the inventory client to the [`ShoppingService`] as its
///   product store
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new();
///
/// let bread = system.inventory_client.add_product("bread", 2).await?;
/// let cart = system.shopping.get_cart(Some(&customer));
/// cart.lock().await.add(&bread, 1);
/// system.shopping.buy(&mut *cart.lock().await).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    /// Client for the inventory actor (catalog seeding and inspection).
    pub inventory_client: InventoryClient,

    /// The shopping service, wired to the inventory actor.
    pub shopping: Arc<ShoppingService>,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Starts a system with [`ShopConfig::default`]. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(ShopConfig::default())
    }

    pub fn with_config(config: ShopConfig) -> Self {
        info!(?config, "Starting shop system");

        let (inventory_actor, inventory_client) =
            crate::inventory_actor::new(config.inventory_buffer);
        let inventory_handle = tokio::spawn(inventory_actor.run());

        let shopping = Arc::new(ShoppingService::new(Arc::new(inventory_client.clone())));

        Self {
            inventory_client,
            shopping,
            handles: vec![inventory_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the clients held here, which closes the inventory channel, then waits for the
    /// actor task to finish. Clones of `shopping` or `inventory_client` held elsewhere keep
    /// the channel open, so drop them before calling this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.shopping);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorPanicked(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}
