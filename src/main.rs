use cart_service::lifecycle::{setup_tracing, ShopConfig, ShopSystem};
use cart_service::model::Customer;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting shop demo");

    let system = ShopSystem::with_config(ShopConfig::from_env());

    // Seed the catalog
    let bread = system
        .inventory_client
        .add_product("bread", 2)
        .await
        .map_err(|e| e.to_string())?;
    let snickers = system
        .inventory_client
        .add_product("Snickers", 4)
        .await
        .map_err(|e| e.to_string())?;

    let customer = Customer::new(1, "89008008080");

    // Fill the customer's cart
    let cart = system.shopping.get_cart(Some(&customer));
    {
        let mut cart = cart.lock().await;
        cart.add(&bread, 1);
        cart.add(&snickers, 3);
    }

    let span = tracing::info_span!("checkout", customer_id = %customer.id);
    let result = async {
        info!("Buying cart");
        let mut cart = cart.lock().await;
        system.shopping.buy(&mut cart).await
    }
    .instrument(span)
    .await;

    match result {
        Ok(bought) => info!(
            bought,
            bread = bread.count(),
            snickers = snickers.count(),
            "Checkout finished"
        ),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    // A second attempt at more bread than is left
    {
        let mut cart = cart.lock().await;
        cart.add(&bread, 5);
        if let Err(e) = system.shopping.buy(&mut cart).await {
            info!(error = %e, lines_left = cart.len(), "Second checkout rejected as expected");
        }
    }

    drop(cart);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
