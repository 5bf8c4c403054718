//! Error types for the purchase transaction.

use crate::model::StockError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that abort a [`buy`](crate::shopping::ShoppingService::buy).
///
/// Every variant stops the purchase at the line that raised it. Lines bought before
/// that point stay bought; that line and the ones after it stay in the cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuyError {
    /// The cart has no customer attached.
    #[error("Cart has no owner")]
    NoOwner,

    /// A line asks for zero units of the named product.
    #[error("Invalid quantity for product '{0}': quantity must be positive")]
    InvalidQuantity(String),

    /// A line's product has an empty or missing name. Carries that name.
    #[error("Invalid product: '{0}'")]
    InvalidProduct(String),

    /// A line asks for more than the product has left.
    #[error("Insufficient inventory for '{name}': requested {requested}, available {available}")]
    InsufficientInventory {
        name: String,
        requested: u32,
        available: u32,
    },

    /// The store failed to persist a purchased line. The line's decrement was rolled
    /// back and the line is still in the cart.
    #[error("Failed to persist '{name}': {source}")]
    Persistence {
        name: String,
        #[source]
        source: StoreError,
    },
}

impl From<StockError> for BuyError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::InsufficientInventory {
                name,
                requested,
                available,
            } => BuyError::InsufficientInventory {
                name,
                requested,
                available,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_product_message_carries_the_empty_name() {
        assert_eq!(
            BuyError::InvalidProduct(String::new()).to_string(),
            "Invalid product: ''"
        );
    }

    #[test]
    fn stock_error_converts() {
        let err: BuyError = StockError::InsufficientInventory {
            name: "bread".to_string(),
            requested: 3,
            available: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Insufficient inventory for 'bread': requested 3, available 2"
        );
    }
}
