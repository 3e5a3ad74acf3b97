//! # Catalog
//!
//! Owns the products for the lifetime of the process. Carts hold product ids
//! and checkout borrows the catalog mutably only for the stock commit.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::product::{Product, ProductId};

/// In-memory product store.
#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product and returns its id. Re-inserting an id replaces it.
    pub fn insert(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.insert(id, product);
        id
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(*id))
    }

    pub fn require_mut(&mut self, id: &ProductId) -> CoreResult<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or(CoreError::ProductNotFound(*id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
