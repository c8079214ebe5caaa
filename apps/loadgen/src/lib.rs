//! # DevOps Loadgen
//!
//! Simulated-user load generator for the DevOps API server.
//!
//! ```text
//! cli ──► LoadConfig ──► runner::run ──► Stats ──► summary table
//!                            │
//!                        profile (weighted tasks, payloads, think time)
//! ```

pub mod cli;
pub mod error;
pub mod profile;
pub mod runner;
pub mod stats;

// Re-exports
pub use cli::Args;
pub use error::{LoadError, LoadResult};
pub use profile::{Profile, Task};
pub use runner::{run, LoadConfig};
pub use stats::Stats;
