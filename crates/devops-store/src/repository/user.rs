//! # User Repository
//!
//! In-memory operations for users.
//!
//! ## Id Assignment
//! Users get ids from a monotonically increasing counter that starts after
//! the highest seeded id. Ids are never reused.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use devops_core::{NewUser, User};

/// Backing table for users, keyed by id.
#[derive(Debug)]
pub struct UserTable {
    rows: BTreeMap<u64, User>,
    next_id: u64,
}

impl UserTable {
    pub(crate) fn from_rows(rows: Vec<User>) -> Self {
        let next_id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        UserTable {
            rows: rows.into_iter().map(|u| (u.id, u)).collect(),
            next_id,
        }
    }
}

impl Default for UserTable {
    fn default() -> Self {
        UserTable {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Repository for user operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.users();
///
/// let all = repo.list().await;
/// let john = repo.get(1).await;
/// ```
#[derive(Debug, Clone)]
pub struct UserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(table: Arc<RwLock<UserTable>>) -> Self {
        UserRepository { table }
    }

    /// Lists all users in id order.
    pub async fn list(&self) -> Vec<User> {
        let table = self.table.read().await;
        table.rows.values().cloned().collect()
    }

    /// Gets a user by id.
    ///
    /// ## Returns
    /// * `Some(User)` - User found
    /// * `None` - No user with that id
    pub async fn get(&self, id: u64) -> Option<User> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned()
    }

    /// Stores a new user and returns it with its assigned id.
    pub async fn create(&self, new_user: NewUser) -> User {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let user = new_user.with_id(id);
        table.rows.insert(id, user.clone());

        debug!(id, name = %user.name, "User created");
        user
    }

}

// =============================================================================
// Unit Tests
// =============================================================================
