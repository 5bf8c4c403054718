//! Shopping cart: an optional owner plus product lines.

use super::{Customer, ProductId, ProductRef};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One (product, quantity) pair held by a [`Cart`].
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: ProductRef,
    pub quantity: u32,
}

/// A customer's (or a guest's) cart.
///
/// Lines are keyed by product identity and iterate in ascending [`ProductId`] order,
/// i.e. in the order the products were created. Nothing is validated on `add`; a zero
/// quantity or a nameless product is only rejected when the cart is bought.
///
/// `Cart` is not `Clone`. The registry hands out one shared instance per
/// customer.
#[derive(Debug, Default)]
pub struct Cart {
    owner: Option<Customer>,
    lines: BTreeMap<ProductId, CartLine>,
}

impl Cart {
    /// Creates an empty cart. `None` makes it an anonymous cart.
    pub fn new(owner: Option<Customer>) -> Self {
        Self {
            owner,
            lines: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> Option<&Customer> {
        self.owner.as_ref()
    }

    /// Puts `quantity` of `product` in the cart, replacing any previous quantity for the
    /// same product.
    pub fn add(&mut self, product: &ProductRef, quantity: u32) {
        self.lines.insert(
            product.id(),
            CartLine {
                product: Arc::clone(product),
                quantity,
            },
        );
    }

    /// Live view of the cart lines.
    pub fn lines(&self) -> &BTreeMap<ProductId, CartLine> {
        &self.lines
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.lines.get(&id).map(|line| line.quantity)
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        self.lines.remove(&id)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
