//! Per-customer cart registry.

use crate::model::{Cart, Customer, CustomerId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// A cart shared between every caller that asked for the same customer.
///
/// Lock it to add lines or to pass it to
/// [`ShoppingService::buy`](crate::shopping::ShoppingService::buy).
pub type SharedCart = Arc<tokio::sync::Mutex<Cart>>;

/// Maps customer identity to that customer's cart.
///
/// The `None` key is the anonymous (guest) cart. Carts are created on first request and
/// live as long as the registry.
#[derive(Debug, Default)]
pub struct CartRegistry {
    carts: Mutex<HashMap<Option<CustomerId>, SharedCart>>,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cart for `customer`, creating an empty one owned by `customer` if
    /// this is the first request for that identity.
    pub fn cart_for(&self, customer: Option<&Customer>) -> SharedCart {
        let key = customer.map(|c| c.id);
        let mut carts = self.carts.lock().unwrap_or_else(PoisonError::into_inner);
        let cart = carts.entry(key).or_insert_with(|| {
            debug!(customer_id = ?key, "Creating cart");
            Arc::new(tokio::sync::Mutex::new(Cart::new(customer.cloned())))
        });
        Arc::clone(cart)
    }

    /// Number of carts created so far.
    pub fn len(&self) -> usize {
        self.carts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_customer_gets_same_cart() {
        let registry = CartRegistry::new();
        let customer = Customer::new(1, "89008008080");

        let first = registry.cart_for(Some(&customer));
        let second = registry.cart_for(Some(&customer));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn identity_is_the_customer_id() {
        let registry = CartRegistry::new();
        let original = Customer::new(1, "89008008080");
        let new_phone = Customer::new(1, "89990000000");

        let first = registry.cart_for(Some(&original));
        let second = registry.cart_for(Some(&new_phone));

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn anonymous_cart_is_shared_and_distinct() {
        let registry = CartRegistry::new();
        let customer = Customer::new(1, "89008008080");

        let guest = registry.cart_for(None);
        let guest_again = registry.cart_for(None);
        let owned = registry.cart_for(Some(&customer));

        assert!(Arc::ptr_eq(&guest, &guest_again));
        assert!(!Arc::ptr_eq(&guest, &owned));
        assert_eq!(registry.len(), 2);
    }
}
