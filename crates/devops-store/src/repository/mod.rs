//! # Repository Module
//!
//! Repository implementations over the in-memory collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  axum handler                                                          │
//! │       │                                                                 │
//! │       │  store.products().update(1, patch)                             │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list(&self)                                                       │
//! │  ├── get(&self, id)                                                    │
//! │  ├── create(&self, new_product)                                        │
//! │  └── update(&self, id, patch)                                          │
//! │       │                                                                 │
//! │       │  RwLock read / write                                            │
//! │       ▼                                                                 │
//! │  ProductTable (Vec<Product>)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`UserRepository`](user::UserRepository) - User listing, lookup, creation
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
pub mod user;
