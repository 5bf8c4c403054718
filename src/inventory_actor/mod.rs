//! In-memory product store backed by an actor.

pub mod actor;
pub mod client;

pub use actor::*;
pub use client::*;

/// Creates a new inventory actor and its client.
///
/// The actor does nothing until [`InventoryActor::run`] is spawned.
pub fn new(buffer_size: usize) -> (InventoryActor, InventoryClient) {
    InventoryActor::new(buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::store::{ProductStore, StoreError};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_inventory_actor_catalog_and_saves() {
        let (actor, client) = new(8);
        let handle = tokio::spawn(actor.run());

        let bread = client.add_product("bread", 2).await.unwrap();
        let twin = client.add_product("bread", 7).await.unwrap();
        let snickers = client.add_product("Snickers", 4).await.unwrap();

        assert_eq!(client.get_all().await.unwrap().len(), 3);

        let breads = client.get_by_name("bread").await.unwrap();
        let ids: Vec<_> = breads.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![bread.id(), twin.id()]);
        assert!(client.get_by_name("Bread").await.unwrap().is_empty());

        // Counts are shared with whoever holds the handle; only save records them.
        snickers.subtract_count(3).unwrap();
        assert_eq!(client.persisted_count(snickers.id()).await.unwrap(), Some(4));
        client.save(&snickers).await.unwrap();
        assert_eq!(client.persisted_count(snickers.id()).await.unwrap(), Some(1));
        assert_eq!(client.save_count().await.unwrap(), 1);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_save_registers_unknown_product() {
        let (actor, client) = new(8);
        let handle = tokio::spawn(actor.run());

        let stray: crate::model::ProductRef = Arc::new(Product::new("stray", 3));
        assert_eq!(client.persisted_count(stray.id()).await.unwrap(), None);

        client.save(&stray).await.unwrap();
        assert_eq!(client.persisted_count(stray.id()).await.unwrap(), Some(3));
        assert_eq!(client.get_by_name("stray").await.unwrap().len(), 1);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = new(8);
        drop(actor);

        let result = client.get_all().await;
        assert_eq!(result.err(), Some(StoreError::ActorClosed));
    }
}
