//! # Store Handle
//!
//! The shared handle over both collections.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shared Collections                                 │
//! │                                                                         │
//! │  api-server startup                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::seeded() ← Load seed users + products                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Arc<RwLock<UserTable>>                 │                           │
//! │  │  Arc<RwLock<ProductTable>>              │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Store is Clone: every handler holds the same Arcs              │
//! │       ▼                                                                 │
//! │  GET  handlers ──► read lock  (many at once)                           │
//! │  POST/PUT      ──► write lock (one at a time, per collection)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::repository::product::{ProductRepository, ProductTable};
use crate::repository::user::{UserRepository, UserTable};
use crate::seed;

/// Main store handle providing repository access.
///
/// ## Usage in Handlers
/// ```rust,ignore
/// async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
///     Json(state.store.users().list().await)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    users: Arc<RwLock<UserTable>>,
    products: Arc<RwLock<ProductTable>>,
}

impl Store {
    /// Creates a store pre-populated with the seed users and products.
    pub fn seeded() -> Self {
        let users = seed::users();
        let products = seed::products();

        info!(
            users = users.len(),
            products = products.len(),
            "Seeding in-memory store"
        );

        Store {
            users: Arc::new(RwLock::new(UserTable::from_rows(users))),
            products: Arc::new(RwLock::new(ProductTable::from_rows(products))),
        }
    }

    /// Creates a store with both collections empty (for testing).
    pub fn empty() -> Self {
        Store {
            users: Arc::new(RwLock::new(UserTable::default())),
            products: Arc::new(RwLock::new(ProductTable::default())),
        }
    }

    /// Returns the user repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(Arc::clone(&self.users))
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.products))
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::seeded()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use devops_core::NewUser;

    #[tokio::test]
    async fn test_seeded_store() {
        let store = Store::seeded();
        assert_eq!(store.users().list().await.len(), 2);
        assert_eq!(store.products().list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = Store::empty();
        assert!(store.users().list().await.is_empty());
        assert!(store.products().list().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_collections() {
        let store = Store::seeded();
        let other = store.clone();

        other
            .users()
            .create(NewUser {
                name: "Shared".to_string(),
                email: "shared@example.com".to_string(),
            })
            .await;

        assert_eq!(store.users().list().await.len(), 3);
    }

    #[tokio::test]
    async fn test_separate_stores_are_isolated() {
        let a = Store::seeded();
        let b = Store::seeded();

        a.users()
            .create(NewUser {
                name: "Only A".to_string(),
                email: "a@example.com".to_string(),
            })
            .await;

        assert_eq!(b.users().list().await.len(), 2);
    }
}
