//! # DevOps API Server
//!
//! REST API over the in-memory users and products collections, plus the
//! arithmetic utility.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Server Routes                               │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  Users         │  │  Products      │  │  Calc                      ││
//! │  │                │  │                │  │                            ││
//! │  │ • GET  list    │  │ • GET  list    │  │ • GET /api/calc/{op}?a=&b= ││
//! │  │ • GET  {id}    │  │ • GET  {id}    │  │   add, subtract,           ││
//! │  │ • POST create  │  │ • POST create  │  │   multiply, divide         ││
//! │  │                │  │ • PUT  {id}    │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  ┌────────────────┐                                                    │
//! │  │  System        │      Middleware: TraceLayer → CorsLayer            │
//! │  │ • GET /        │                                                    │
//! │  │ • GET /health  │                                                    │
//! │  └────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 5000)
//! - `SERVICE_NAME` - Name reported by `/health` (default: devops-testing-app)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use devops_store::Store;

// Re-exports
pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::build_router;

/// Shared application state.
///
/// Cloned into every handler; both fields are cheap `Arc` clones.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates the state from a store and configuration.
    pub fn new(store: Store, config: ServerConfig) -> Self {
        AppState {
            store,
            config: Arc::new(config),
        }
    }
}
