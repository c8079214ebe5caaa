//! # devops-core: Pure Logic for the DevOps Testing App
//!
//! This crate holds everything that can be expressed as a pure function:
//! the arithmetic utility, the resource types served by the API, and the
//! presence checks applied to incoming payloads.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     DevOps Testing App Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 api-server (axum handlers)                      │   │
//! │  │     /api/users   /api/products   /api/calc/{op}   /health       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ devops-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   calc    │  │   types   │  │ validation│  │   error   │  │   │
//! │  │   │ add, sub  │  │   User    │  │ presence  │  │ CalcError │  │   │
//! │  │   │ mul, div  │  │  Product  │  │  checks   │  │ CoreError │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                devops-store (in-memory collections)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calc`] - add, subtract, multiply, divide
//! - [`types`] - User and Product resources plus request payloads
//! - [`validation`] - Presence checks for request payloads
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use devops_core::calc::{add, divide, multiply};
//! use devops_core::CalcError;
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(divide(10, 2).unwrap(), 5.0);
//! assert!(matches!(multiply(-1, 5), Err(CalcError::InvalidArgument)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calc::Operation;
pub use error::{CalcError, CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Service name reported by the health endpoint unless overridden.
pub const DEFAULT_SERVICE_NAME: &str = "devops-testing-app";
