//! # Routes
//!
//! Router assembly. Each resource module contributes its own
//! `Router<AppState>`; this module merges them and adds middleware.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Request                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  TraceLayer ── span per request (method, uri, status, latency)         │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  CorsLayer ── permissive                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  users │ products │ calc │ system                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calc;
pub mod products;
pub mod system;
pub mod users;

use axum::extract::rejection::JsonRejection;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use devops_core::ValidationError;

use crate::AppState;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(system::routes())
        .merge(users::routes())
        .merge(products::routes())
        .merge(calc::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unwraps a create payload.
///
/// Well-formed JSON whose fields have the wrong types is reported with the
/// decoder's reason. Anything else that is not readable JSON (wrong content
/// type, syntax error, empty body) counts as an empty payload, so the
/// presence check answers for it.
pub(crate) fn create_payload<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ValidationError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::JsonDataError(err)) => Err(ValidationError::MalformedBody {
            reason: err.body_text(),
        }),
        Err(rejection) => {
            debug!(%rejection, "Unreadable payload treated as empty");
            Ok(T::default())
        }
    }
}
