use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub u64);

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A shopper. Only the `id` matters to the cart registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub phone: String,
}

impl Customer {
    /// Creates a new Customer.
    ///
    /// # Arguments
    /// * `id` - Registry key for the customer's cart
    /// * `phone` - Contact phone number
    pub fn new(id: impl Into<CustomerId>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phone: phone.into(),
        }
    }
}
