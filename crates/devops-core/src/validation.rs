//! # Validation Module
//!
//! Presence checks for incoming payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: axum Json extractor                                          │
//! │  ├── Body is JSON? Field types match?                                  │
//! │  └── Failure → treated as an empty payload                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present?                                          │
//! │  └── CreateUserRequest → NewUser, CreateProductRequest → NewProduct    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: devops-store                                                 │
//! │  └── Id assignment                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field contents (email format, price sign, name length) are accepted as
//! sent.
//!
//! ## Usage
//! ```rust
//! use devops_core::validation::validate_new_user;
//! use devops_core::CreateUserRequest;
//!
//! let req = CreateUserRequest { name: Some("Test User".into()), email: None };
//! let err = validate_new_user(req).unwrap_err();
//! assert_eq!(err.to_string(), "Name and email are required");
//! ```

use crate::error::ValidationError;
use crate::types::{CreateProductRequest, CreateUserRequest, NewProduct, NewUser};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Message returned when a user payload lacks `name` or `email`.
pub const USER_FIELDS_REQUIRED: &str = "Name and email are required";

/// Message returned when a product payload lacks `name` or `price`.
pub const PRODUCT_FIELDS_REQUIRED: &str = "Name and price are required";

// =============================================================================
// Payload Validators
// =============================================================================

/// Checks that a user payload carries both `name` and `email`.
///
/// ## Errors
/// [`ValidationError::MissingFields`] listing every absent field.
pub fn validate_new_user(req: CreateUserRequest) -> ValidationResult<NewUser> {
    match (req.name, req.email) {
        (Some(name), Some(email)) => Ok(NewUser { name, email }),
        (name, email) => Err(ValidationError::missing(
            &missing_fields(&[("name", name.is_some()), ("email", email.is_some())]),
            USER_FIELDS_REQUIRED,
        )),
    }
}

/// Checks that a product payload carries both `name` and `price`.
///
/// `stock` is optional and defaults to 0.
///
/// ## Errors
/// [`ValidationError::MissingFields`] listing every absent field.
pub fn validate_new_product(req: CreateProductRequest) -> ValidationResult<NewProduct> {
    match (req.name, req.price) {
        (Some(name), Some(price)) => Ok(NewProduct {
            name,
            price,
            stock: req.stock.unwrap_or(0),
        }),
        (name, price) => Err(ValidationError::missing(
            &missing_fields(&[("name", name.is_some()), ("price", price.is_some())]),
            PRODUCT_FIELDS_REQUIRED,
        )),
    }
}

fn missing_fields<'a>(checks: &[(&'a str, bool)]) -> Vec<&'a str> {
    checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| *field)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
