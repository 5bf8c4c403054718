use super::{BuyError, CartRegistry, SharedCart};
use crate::model::{Cart, Customer, ProductRef};
use crate::store::{ProductStore, StoreError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, field, info, instrument, warn, Span};

/// Cart lookup and the purchase transaction.
///
/// # Locking
/// - The registry lock is held only while a cart handle is looked up.
/// - Each cart has its own async lock; callers hold it while calling [`buy`](Self::buy).
/// - One inventory-wide lock serializes the subtract-and-persist step of every line.
///   It is held per line, not per purchase.
pub struct ShoppingService {
    store: Arc<dyn ProductStore>,
    carts: Arc<CartRegistry>,
    purchase_lock: Mutex<()>,
}

impl ShoppingService {
    /// Creates a service with its own, empty cart registry.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self::with_registry(store, Arc::new(CartRegistry::new()))
    }

    pub fn with_registry(store: Arc<dyn ProductStore>, carts: Arc<CartRegistry>) -> Self {
        Self {
            store,
            carts,
            purchase_lock: Mutex::new(()),
        }
    }

    pub fn registry(&self) -> &Arc<CartRegistry> {
        &self.carts
    }

    /// Returns the cart for `customer`; `None` is the shared anonymous cart.
    pub fn get_cart(&self, customer: Option<&Customer>) -> SharedCart {
        self.carts.cart_for(customer)
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<ProductRef>, StoreError> {
        self.store.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_name(&self, name: &str) -> Result<Vec<ProductRef>, StoreError> {
        self.store.get_by_name(name).await
    }

    /// Buys every line in `cart`.
    ///
    /// Returns `Ok(false)` for an owned cart with no lines and `Ok(true)` once every line
    /// was bought. Lines are bought one at a time in cart order; each bought line is
    /// decremented, saved and removed from the cart before the next one is looked at.
    ///
    /// # Errors
    /// - [`BuyError::NoOwner`] before anything else if the cart is anonymous.
    /// - [`BuyError::InvalidQuantity`], [`BuyError::InvalidProduct`],
    ///   [`BuyError::InsufficientInventory`] or [`BuyError::Persistence`] for the first
    ///   line that cannot be bought. The purchase stops there: earlier lines stay bought,
    ///   that line and later ones stay in the cart untouched.
    #[instrument(skip(self, cart), fields(customer_id = tracing::field::Empty, lines = cart.len()))]
    pub async fn buy(&self, cart: &mut Cart) -> Result<bool, BuyError> {
        let Some(customer_id) = cart.owner().map(|owner| owner.id) else {
            warn!("Rejected purchase: cart has no owner");
            return Err(BuyError::NoOwner);
        };
        Span::current().record("customer_id", field::display(customer_id));

        if cart.is_empty() {
            debug!("Cart is empty, nothing to buy");
            return Ok(false);
        }

        let pending: Vec<(ProductRef, u32)> = cart
            .lines()
            .values()
            .map(|line| (Arc::clone(&line.product), line.quantity))
            .collect();

        for (product, quantity) in pending {
            if let Err(e) = self.buy_line(&product, quantity).await {
                warn!(product_id = %product.id(), error = %e, "Purchase aborted");
                return Err(e);
            }
            cart.remove(product.id());
        }

        info!("Purchase complete");
        Ok(true)
    }

    async fn buy_line(&self, product: &ProductRef, quantity: u32) -> Result<(), BuyError> {
        if quantity == 0 {
            return Err(BuyError::InvalidQuantity(product.display_name().to_string()));
        }
        if !product.has_name() {
            return Err(BuyError::InvalidProduct(product.display_name().to_string()));
        }

        let _inventory = self.purchase_lock.lock().await;

        let remaining = product.subtract_count(quantity)?;
        if let Err(source) = self.store.save(product).await {
            product.restock(quantity);
            return Err(BuyError::Persistence {
                name: product.display_name().to_string(),
                source,
            });
        }

        info!(
            product_id = %product.id(),
            name = product.display_name(),
            requested = quantity,
            remaining,
            "Line bought"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::store::mock::MockProductStore;

    fn service_with(mock: &MockProductStore) -> ShoppingService {
        ShoppingService::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_anonymous_empty_cart_has_no_owner() {
        let mock = MockProductStore::new();
        let service = service_with(&mock);

        let result = service.buy(&mut Cart::new(None)).await;

        assert_eq!(result, Err(BuyError::NoOwner));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_quantity_is_checked_before_name() {
        let mock = MockProductStore::new();
        let service = service_with(&mock);
        let nameless: ProductRef = Arc::new(Product::unnamed(5));
        let mut cart = Cart::new(Some(Customer::new(1, "89008008080")));
        cart.add(&nameless, 0);

        let result = service.buy(&mut cart).await;

        assert_eq!(result, Err(BuyError::InvalidQuantity(String::new())));
        assert_eq!(nameless.count(), 5);
    }

    #[tokio::test]
    async fn test_missing_name_is_reported_as_empty() {
        let mock = MockProductStore::new();
        let service = service_with(&mock);
        let nameless: ProductRef = Arc::new(Product::unnamed(100));
        let mut cart = Cart::new(Some(Customer::new(1, "89008008080")));
        cart.add(&nameless, 1);

        let err = service.buy(&mut cart).await.unwrap_err();

        assert_eq!(err, BuyError::InvalidProduct(String::new()));
        assert_eq!(mock.save_calls(), 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(nameless.count(), 100);
    }

    #[tokio::test]
    async fn test_registry_is_shared_with_the_service() {
        let mock = MockProductStore::new();
        let registry = Arc::new(CartRegistry::new());
        let service =
            ShoppingService::with_registry(Arc::new(mock.clone()), Arc::clone(&registry));
        let customer = Customer::new(7, "89008008080");

        let from_service = service.get_cart(Some(&customer));
        let from_registry = registry.cart_for(Some(&customer));

        assert!(Arc::ptr_eq(&from_service, &from_registry));
        assert_eq!(service.registry().len(), 1);
    }
}
