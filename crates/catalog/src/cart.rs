//! Append-only shopping cart.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Products the user added, in click order.
///
/// Entries are copies taken at add time. There is no dedup, no quantity and
/// no removal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<Product>);

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.0.push(product);
    }

    pub fn items(&self) -> &[Product] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
