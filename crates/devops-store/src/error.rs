//! # Store Error Types
//!
//! Error types for repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository lookup misses                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Names the entity and id                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in api-server) ← 404 {"error": "Product not found"}         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Entity not found in its collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        StoreError::NotFound { entity, id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
