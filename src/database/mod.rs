//! Seam to the optional external database collaborator.
//!
//! This service never owns a database. It only observes one that may or may
//! not have been wired in by the deployment:
//! - [`DatabaseModule`]: resolves the (possibly absent) handle
//! - [`DatabaseHandle`]: the live handle, probed by listing collections
//! - [`DatabaseBinding`]: the built-in absent / uninitialized / ready variants
//! - Mock handle for testing

pub mod binding;
pub mod mock;

use std::sync::Arc;

use crate::error::{DatabaseError, ResolveError};

pub use binding::DatabaseBinding;
pub use mock::{MockConfig, MockDatabase};

/// A live database handle.
///
/// Implementations are owned and synchronized by whoever provides them.
pub trait DatabaseHandle: Send + Sync {
    /// Declared database name, if the handle exposes one.
    fn name(&self) -> Option<String>;

    /// List storage collection names, in the order the server returns them.
    fn list_collection_names(&self) -> Result<Vec<String>, DatabaseError>;
}

/// Optional database module that may yield a handle.
pub trait DatabaseModule: Send + Sync {
    /// Resolve the handle.
    ///
    /// `Err(NotFound)` means no module is wired in at all, `Ok(None)` means
    /// the module is present but its handle was never initialized.
    fn resolve(&self) -> Result<Option<Arc<dyn DatabaseHandle>>, ResolveError>;
}
