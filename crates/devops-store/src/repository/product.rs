//! # Product Repository
//!
//! In-memory operations for products.
//!
//! ## Key Operations
//! - Listing in insertion order
//! - Lookup by id (linear scan, the catalogue is small)
//! - Creation with `max(id) + 1` id assignment
//! - Partial updates
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PUT /api/products/1  {"price": 899.99, "stock": 15}                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update(1, ProductPatch { name: None, price: Some, stock: Some })      │
//! │       │                                                                 │
//! │       ├── id missing? → StoreError::NotFound                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Laptop { price: 999.99 → 899.99, stock: 10 → 15, name unchanged }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use devops_core::{NewProduct, Product, ProductPatch};

/// Backing table for products, in insertion order.
#[derive(Debug, Default)]
pub struct ProductTable {
    rows: Vec<Product>,
}

impl ProductTable {
    pub(crate) fn from_rows(rows: Vec<Product>) -> Self {
        ProductTable { rows }
    }

    fn next_id(&self) -> u64 {
        self.rows.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

/// Repository for product operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// let laptop = repo.get(1).await;
/// let updated = repo.update(1, patch).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    table: Arc<RwLock<ProductTable>>,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(table: Arc<RwLock<ProductTable>>) -> Self {
        ProductRepository { table }
    }

    /// Lists all products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.table.read().await.rows.clone()
    }

    /// Gets a product by id.
    pub async fn get(&self, id: u64) -> Option<Product> {
        let table = self.table.read().await;
        table.rows.iter().find(|p| p.id == id).cloned()
    }

    /// Stores a new product and returns it with its assigned id.
    ///
    /// The id is one more than the highest id currently stored.
    pub async fn create(&self, new_product: NewProduct) -> Product {
        let mut table = self.table.write().await;

        let product = new_product.with_id(table.next_id());
        table.rows.push(product.clone());

        debug!(id = product.id, name = %product.name, "Product created");
        product
    }

    /// Applies a partial update to a product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The product after the update
    /// * `Err(StoreError::NotFound)` - No product with that id
    pub async fn update(&self, id: u64, patch: ProductPatch) -> StoreResult<Product> {
        let mut table = self.table.write().await;

        let product = table
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        product.apply(patch);

        debug!(id, price = product.price, stock = product.stock, "Product updated");
        Ok(product.clone())
    }

}

// =============================================================================
// Unit Tests
// =============================================================================
