//! # Error Types
//!
//! Domain-specific error types for devops-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  devops-core errors (this file)                                        │
//! │  ├── CalcError        - Arithmetic domain failures                     │
//! │  ├── ValidationError  - Missing request fields                         │
//! │  └── CoreError        - Wraps both                                     │
//! │                                                                         │
//! │  devops-store errors (separate crate)                                  │
//! │  └── StoreError       - Lookup failures                                │
//! │                                                                         │
//! │  api-server errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: CalcError/ValidationError → CoreError → ApiError → Client       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Calc Error
// =============================================================================

/// Failures raised by the arithmetic utility.
///
/// Both variants are terminal: the calc functions never retry and never log,
/// they hand the condition straight back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand is outside the operation's domain.
    ///
    /// ## When This Occurs
    /// - `multiply` called with a negative operand
    #[error("Negative values are not allowed.")]
    InvalidArgument,

    /// The divisor is zero (including `-0.0`).
    #[error("Cannot divide by zero.")]
    DivisionByZero,
}

/// Convenience alias for calc results.
pub type CalcResult<T> = Result<T, CalcError>;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only presence is checked; field contents are accepted as sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are absent from the payload.
    ///
    /// The message is the exact text returned to HTTP clients, e.g.
    /// `"Name and email are required"`.
    #[error("{message}")]
    MissingFields {
        fields: Vec<String>,
        message: String,
    },

    /// The request body could not be read as JSON.
    #[error("Invalid JSON body: {reason}")]
    MalformedBody { reason: String },
}

impl ValidationError {
    /// Creates a MissingFields error for the given required fields.
    pub fn missing(fields: &[&str], message: impl Into<String>) -> Self {
        ValidationError::MissingFields {
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for everything this crate can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Operation name not recognised by [`crate::calc::Operation`].
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
