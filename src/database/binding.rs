//! Built-in database module variants.

use std::fmt;
use std::sync::Arc;

use crate::error::ResolveError;

use super::{DatabaseHandle, DatabaseModule};

/// How the database collaborator is wired into this process.
#[derive(Clone, Default)]
pub enum DatabaseBinding {
    /// No database module in this deployment.
    #[default]
    Missing,
    /// Module present, handle not initialized.
    Uninitialized,
    /// Module present with a live handle.
    Ready(Arc<dyn DatabaseHandle>),
}

impl DatabaseBinding {
    /// Wrap a concrete handle.
    pub fn ready<H>(handle: H) -> Self
    where
        H: DatabaseHandle + 'static,
    {
        Self::Ready(Arc::new(handle))
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Uninitialized => "uninitialized",
            Self::Ready(_) => "ready",
        }
    }
}

impl fmt::Debug for DatabaseBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DatabaseBinding").field(&self.kind()).finish()
    }
}

impl DatabaseModule for DatabaseBinding {
    fn resolve(&self) -> Result<Option<Arc<dyn DatabaseHandle>>, ResolveError> {
        match self {
            Self::Missing => Err(ResolveError::NotFound),
            Self::Uninitialized => Ok(None),
            Self::Ready(handle) => Ok(Some(Arc::clone(handle))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MockDatabase;

    #[test]
    fn default_binding_is_missing() {
        let binding = DatabaseBinding::default();
        assert_eq!(binding.kind(), "missing");
        assert_eq!(binding.resolve().err(), Some(ResolveError::NotFound));
    }

    #[test]
    fn uninitialized_resolves_to_none() {
        let resolved = DatabaseBinding::Uninitialized.resolve().unwrap();
        assert!(resolved.is_none());
    }

    #[test]
    fn ready_resolves_to_handle() {
        let binding = DatabaseBinding::ready(MockDatabase::new().with_name("kir"));
        let handle = binding.resolve().unwrap().unwrap();
        assert_eq!(handle.name().as_deref(), Some("kir"));
        assert_eq!(format!("{:?}", binding), "DatabaseBinding(\"ready\")");
    }
}
