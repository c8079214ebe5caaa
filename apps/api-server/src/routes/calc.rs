//! # Calc Routes
//!
//! Exposes the arithmetic utility over HTTP.
//!
//! ```text
//! GET /api/calc/{op}?a=<f64>&b=<f64>
//!
//!   200 {"operation": "divide", "a": 10.0, "b": 4.0, "result": 2.5}
//!   400 {"error": "Cannot divide by zero.",           "code": "DIVISION_BY_ZERO"}
//!   400 {"error": "Negative values are not allowed.", "code": "INVALID_ARGUMENT"}
//!   400 missing, non-numeric or non-finite a/b        "code": "VALIDATION_ERROR"
//!   400 {"error": "Result is out of range",           "code": "OUT_OF_RANGE"}
//!   404 {"error": "Unknown operation: pow",           "code": "NOT_FOUND"}
//! ```

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use devops_core::{Operation, ValidationError};

use crate::error::{ApiError, ErrorCode};
use crate::AppState;

/// Calc routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/calc/{op}", get(calculate))
}

/// Operands, both required and finite.
#[derive(Debug, Deserialize)]
pub struct CalcQuery {
    pub a: f64,
    pub b: f64,
}

/// Successful calculation.
#[derive(Debug, Serialize)]
pub struct CalcResponse {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

async fn calculate(
    Path(op): Path<String>,
    query: Result<Query<CalcQuery>, QueryRejection>,
) -> Result<Json<CalcResponse>, ApiError> {
    let operation: Operation = op.parse()?;

    let Query(CalcQuery { a, b }) = query.map_err(|rejection| ValidationError::MalformedBody {
        reason: rejection.body_text(),
    })?;

    if !a.is_finite() || !b.is_finite() {
        return Err(ApiError::validation("Operands must be finite numbers"));
    }

    let result = operation.apply(a, b)?;
    if !result.is_finite() {
        return Err(ApiError::new(ErrorCode::OutOfRange, "Result is out of range"));
    }
    debug!(%operation, a, b, result, "Calculated");

    Ok(Json(CalcResponse {
        operation,
        a,
        b,
        result,
    }))
}

// =============================================================================
// Unit Tests
// =============================================================================
