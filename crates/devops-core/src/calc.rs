//! # Calc Module
//!
//! The arithmetic utility: four pure functions with stated error semantics.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation        Result            Fails with                          │
//! │  ─────────────    ──────────────    ─────────────────────────────────   │
//! │  add(a, b)        a + b             never                               │
//! │  subtract(a, b)   a - b             never                               │
//! │  multiply(a, b)   a * b             InvalidArgument  if a < 0 or b < 0  │
//! │  divide(a, b)     a / b  (f64)      DivisionByZero   if b == 0          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function is generic over the primitive numeric types, touches no
//! shared state, and can be called from any number of threads at once.
//!
//! ## Usage
//! ```rust
//! use devops_core::calc::{self, Operation};
//!
//! assert_eq!(calc::subtract(5, 3), 2);
//! assert_eq!(calc::multiply(2.5, 4.0), Ok(10.0));
//!
//! // Dispatch by name (used by the HTTP layer)
//! let op: Operation = "divide".parse().unwrap();
//! assert_eq!(op.apply(10.0, 4.0), Ok(2.5));
//! ```

use std::fmt;
use std::str::FromStr;

use num_traits::{AsPrimitive, Num};
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult, CoreError};

// =============================================================================
// Operations
// =============================================================================

/// Returns `a + b`.
#[inline]
pub fn add<T: Num>(a: T, b: T) -> T {
    a + b
}

/// Returns `a - b`.
#[inline]
pub fn subtract<T: Num>(a: T, b: T) -> T {
    a - b
}

/// Returns `a * b`.
///
/// Negative operands are outside the domain of this operation and are
/// rejected, never clamped.
///
/// ## Errors
/// [`CalcError::InvalidArgument`] when either operand is negative.
///
/// ## Example
/// ```rust
/// use devops_core::calc::multiply;
/// use devops_core::CalcError;
///
/// assert_eq!(multiply(2, 3), Ok(6));
/// assert_eq!(multiply(-1, 5), Err(CalcError::InvalidArgument));
/// ```
pub fn multiply<T>(a: T, b: T) -> CalcResult<T>
where
    T: Num + PartialOrd + Copy,
{
    let zero = T::zero();
    if a < zero || b < zero {
        return Err(CalcError::InvalidArgument);
    }

    Ok(a * b)
}

/// Returns `a / b` as a floating-point quotient.
///
/// Integer operands are widened to `f64` first, so `divide(7, 2)` is `3.5`.
///
/// ## Errors
/// [`CalcError::DivisionByZero`] when `b` is zero (`0`, `0.0` or `-0.0`).
///
/// ## Example
/// ```rust
/// use devops_core::calc::divide;
/// use devops_core::CalcError;
///
/// assert_eq!(divide(10, 2), Ok(5.0));
/// assert_eq!(divide(6, 0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide<T>(a: T, b: T) -> CalcResult<f64>
where
    T: Num + AsPrimitive<f64>,
{
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    Ok(a.as_() / b.as_())
}

// =============================================================================
// Operation Selector
// =============================================================================

/// One of the four arithmetic operations, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in display order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lowercase name used in URLs and JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Applies the operation to two `f64` operands.
    ///
    /// ## Errors
    /// Whatever the underlying function returns: [`CalcError::InvalidArgument`]
    /// for `multiply`, [`CalcError::DivisionByZero`] for `divide`.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => multiply(a, b),
            Operation::Divide => divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownOperation(name.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
