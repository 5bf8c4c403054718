//! # Mock Product Store
//!
//! Utilities for testing the shopping service without spawning the inventory actor.
//!
//! [`MockProductStore`] answers requests from a queue of scripted expectations and
//! records every call it receives, so tests can assert both *what* the service asked for
//! and *how often*.
//!
//! # Example
//! ```ignore
//! let mock = MockProductStore::new();
//! mock.expect_save().return_ok();
//! mock.expect_save().return_err(StoreError::PersistenceFailure("disk full".into()));
//!
//! let service = ShoppingService::new(Arc::new(mock.clone()));
//! // ... buy something ...
//! assert_eq!(mock.save_calls(), 2);
//! mock.verify(); // Ensures all expectations were met
//! ```
//!
//! A request with no matching expectation at the head of the queue panics, which fails
//! the calling test.

use super::{ProductStore, StoreError};
use crate::model::{ProductId, ProductRef};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A call received by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    GetAll,
    GetByName(String),
    /// The product id and the count it had when it was saved.
    Save { product_id: ProductId, count: u32 },
}

enum Expectation {
    GetAll {
        response: Result<Vec<ProductRef>, StoreError>,
    },
    GetByName {
        name: String,
        response: Result<Vec<ProductRef>, StoreError>,
    },
    Save {
        response: Result<(), StoreError>,
    },
}

/// A scripted [`ProductStore`]. Clones share expectations and call history.
#[derive(Clone, Default)]
pub struct MockProductStore {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProductStore {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `get_all` call.
    pub fn expect_get_all(&self) -> GetAllExpectationBuilder {
        GetAllExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get_by_name` call with exactly `name`.
    pub fn expect_get_by_name(&self, name: impl Into<String>) -> GetByNameExpectationBuilder {
        GetByNameExpectationBuilder {
            name: name.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `save` call.
    pub fn expect_save(&self) -> SaveExpectationBuilder {
        SaveExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<StoreCall> {
        lock(&self.calls).clone()
    }

    /// Number of `save` calls received so far.
    pub fn save_calls(&self) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| matches!(call, StoreCall::Save { .. }))
            .count()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn record(&self, call: StoreCall) -> Option<Expectation> {
        lock(&self.calls).push(call);
        lock(&self.expectations).pop_front()
    }
}

#[async_trait]
impl ProductStore for MockProductStore {
    async fn get_all(&self) -> Result<Vec<ProductRef>, StoreError> {
        match self.record(StoreCall::GetAll) {
            Some(Expectation::GetAll { response }) => response,
            _ => panic!("Unexpected get_all or expectation mismatch"),
        }
    }

    async fn get_by_name(&self, name: &str) -> Result<Vec<ProductRef>, StoreError> {
        match self.record(StoreCall::GetByName(name.to_string())) {
            Some(Expectation::GetByName {
                name: expected,
                response,
            }) => {
                assert_eq!(expected, name, "get_by_name called with unexpected name");
                response
            }
            _ => panic!("Unexpected get_by_name({name:?}) or expectation mismatch"),
        }
    }

    async fn save(&self, product: &ProductRef) -> Result<(), StoreError> {
        let call = StoreCall::Save {
            product_id: product.id(),
            count: product.count(),
        };
        match self.record(call) {
            Some(Expectation::Save { response }) => response,
            _ => panic!("Unexpected save of {} or expectation mismatch", product.id()),
        }
    }
}

/// Builder for `get_all` expectations.
pub struct GetAllExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetAllExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, products: Vec<ProductRef>) {
        lock(&self.expectations).push_back(Expectation::GetAll {
            response: Ok(products),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.expectations).push_back(Expectation::GetAll {
            response: Err(error),
        });
    }
}

/// Builder for `get_by_name` expectations.
pub struct GetByNameExpectationBuilder {
    name: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetByNameExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, products: Vec<ProductRef>) {
        lock(&self.expectations).push_back(Expectation::GetByName {
            name: self.name,
            response: Ok(products),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.expectations).push_back(Expectation::GetByName {
            name: self.name,
            response: Err(error),
        });
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl SaveExpectationBuilder {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        lock(&self.expectations).push_back(Expectation::Save { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        lock(&self.expectations).push_back(Expectation::Save {
            response: Err(error),
        });
    }
}
