//! Product inventory lines.
//!
//! # Identity
//! A `Product` is an addressable record: every instance gets its own [`ProductId`]
//! when it is constructed. Two products that happen to share a name are still two
//! different inventory lines, and a [`Cart`](crate::model::Cart) keys its lines by
//! `ProductId`, never by name.
//!
//! Products are shared by reference ([`ProductRef`]) between the catalog and the carts
//! holding them. The remaining count lives in an atomic so that a purchase can mutate it
//! through any of those references.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt::Display;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

/// Type-safe identity handle for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Allocates the next process-unique id.
    fn next() -> Self {
        static NEXT_PRODUCT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_PRODUCT_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Shared handle to a product. Cloning the handle never clones the inventory line.
pub type ProductRef = Arc<Product>;

/// Errors raised by count mutations on a [`Product`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StockError {
    /// The requested quantity exceeds the remaining count.
    #[error("Insufficient inventory for '{name}': requested {requested}, available {available}")]
    InsufficientInventory {
        name: String,
        requested: u32,
        available: u32,
    },
}

#[derive(Debug)]
pub struct Product {
    id: ProductId,
    name: Option<String>,
    count: AtomicU32,
}

impl Product {
    /// Creates a new named Product.
    ///
    /// # Arguments
    /// * `name` - Product name (an empty name is accepted here and rejected at purchase time)
    /// * `count` - Remaining stock
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self::with_optional_name(Some(name.into()), count)
    }

    /// Creates a Product without a name. Such a product can sit in a cart but can
    /// never be bought.
    pub fn unnamed(count: u32) -> Self {
        Self::with_optional_name(None, count)
    }

    pub fn with_optional_name(name: Option<String>, count: u32) -> Self {
        Self {
            id: ProductId::next(),
            name,
            count: AtomicU32::new(count),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name, or `""` when absent. Used for log fields and error details.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns `false` for an absent or empty name.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Current remaining count.
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// Decrements the count by `quantity` and returns the new count.
    ///
    /// # Errors
    /// [`StockError::InsufficientInventory`] if `quantity` exceeds the remaining count.
    /// The count is left untouched in that case.
    ///
    /// Persisting the new count is the caller's job.
    pub fn subtract_count(&self, quantity: u32) -> Result<u32, StockError> {
        self.count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                count.checked_sub(quantity)
            })
            .map(|previous| previous - quantity)
            .map_err(|available| StockError::InsufficientInventory {
                name: self.display_name().to_string(),
                requested: quantity,
                available,
            })
    }

    /// Adds `quantity` back to the count (saturating) and returns the new count.
    pub fn restock(&self, quantity: u32) -> u32 {
        let previous = self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                Some(count.saturating_add(quantity))
            })
            .unwrap_or_else(|count| count);
        previous.saturating_add(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtract_within_stock_decrements() {
        let bread = Product::new("bread", 5);
        assert_eq!(bread.subtract_count(3), Ok(2));
        assert_eq!(bread.count(), 2);
    }

    #[test]
    fn subtract_whole_stock_leaves_zero() {
        let bread = Product::new("bread", 1);
        assert_eq!(bread.subtract_count(1), Ok(0));
        assert_eq!(bread.count(), 0);
    }

    #[test]
    fn subtract_beyond_stock_fails_and_keeps_count() {
        let bread = Product::new("bread", 2);
        let err = bread.subtract_count(3).unwrap_err();
        assert_eq!(
            err,
            StockError::InsufficientInventory {
                name: "bread".to_string(),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(bread.count(), 2);
    }

    #[test]
    fn restock_saturates() {
        let bread = Product::new("bread", u32::MAX - 1);
        assert_eq!(bread.restock(10), u32::MAX);
        assert_eq!(bread.count(), u32::MAX);
    }

    #[test]
    fn same_name_means_different_products() {
        let a = Product::new("bread", 1);
        let b = Product::new("bread", 1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn empty_and_missing_names_are_not_names() {
        assert!(!Product::new("", 1).has_name());
        assert!(!Product::unnamed(1).has_name());
        assert_eq!(Product::unnamed(1).display_name(), "");
        assert!(Product::new("Snickers", 1).has_name());
    }
}
