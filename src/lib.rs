//! HTTP API for the KIR MAN 1 HST science community site.
//!
//! Serves the community profile and achievement list from frozen in-memory
//! tables, plus a diagnostics endpoint that reports on an optional external
//! database without ever failing:
//!
//! ```text
//! GET /test
//! {
//!   "backend": "✅ Running",
//!   "database": "✅ Connected & Working",
//!   "database_url": "✅ Set",
//!   "database_name": "✅ Set",
//!   "connection_status": "Connected",
//!   "collections": ["anggota", "kegiatan"]
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`content`]: Site content and achievements
//! - [`database`]: Seam to the optional database collaborator
//! - [`diagnostics`]: Status report assembly
//! - [`api`]: HTTP router, handlers and OpenAPI docs
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod content;
pub mod database;
pub mod diagnostics;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result};
