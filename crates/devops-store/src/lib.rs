//! # devops-store: In-Memory Storage for the DevOps Testing App
//!
//! This crate keeps the users and products collections in memory and hands
//! out repositories over them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DevOps Testing App Data Flow                     │
//! │                                                                         │
//! │  axum handler (create_user)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   devops-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories  │    │    Seed      │  │   │
//! │  │   │  (store.rs)   │    │ (repository/)  │    │  (seed.rs)   │  │   │
//! │  │   │               │    │                │    │              │  │   │
//! │  │   │ Arc<RwLock<   │◄───│ UserRepository │    │ 2 users      │  │   │
//! │  │   │   tables>>    │    │ ProductRepo    │    │ 3 products   │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Nothing is written to disk: a restart brings back the seed data.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared `Store` handle
//! - [`seed`] - Initial collection contents
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (user, product)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use devops_store::Store;
//!
//! let store = Store::seeded();
//! let users = store.users().list().await;
//! let laptop = store.products().get(1).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::Store;

pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
