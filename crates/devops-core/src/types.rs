//! # Domain Types
//!
//! Resource types served by the API and the payloads used to create or
//! change them.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌─────────────────┐                    │
//! │  │      User       │            │     Product     │                    │
//! │  │  ─────────────  │            │  ─────────────  │                    │
//! │  │  id (u64)       │            │  id (u64)       │                    │
//! │  │  name           │            │  name           │                    │
//! │  │  email          │            │  price (f64)    │                    │
//! │  └─────────────────┘            │  stock (i64)    │                    │
//! │          ▲                      └─────────────────┘                    │
//! │          │                         ▲          ▲                         │
//! │  ┌───────┴─────────┐    ┌──────────┴──┐  ┌────┴──────────┐            │
//! │  │    NewUser      │    │ NewProduct  │  │ ProductPatch  │            │
//! │  └─────────────────┘    └─────────────┘  └───────────────┘            │
//! │          ▲                     ▲                                        │
//! │  ┌───────┴─────────┐    ┌──────┴──────────────┐                        │
//! │  │CreateUserRequest│    │CreateProductRequest │  raw, all Option       │
//! │  └─────────────────┘    └─────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are assigned by the store, never by clients.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// User
// =============================================================================

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A user that passed presence checks but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Attaches the store-assigned id.
    pub fn with_id(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Raw body of `POST /api/users`.
///
/// Every field is optional so that a missing field surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    /// Applies the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

/// A product that passed presence checks but has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    /// Defaults to 0 when the client omits it.
    pub stock: i64,
}

impl NewProduct {
    /// Attaches the store-assigned id.
    pub fn with_id(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Raw body of `POST /api/products`.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// Partial update for `PUT /api/products/{id}`.
///
/// Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

// =============================================================================
// Unit Tests
// =============================================================================
