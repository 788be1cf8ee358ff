//! Mock database handle for unit testing.
//!
//! This module provides a handle that can be used in tests and local demos
//! without a real database server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::DatabaseError;

use super::DatabaseHandle;

/// Configuration for mock handle behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Name to report, if any.
    pub name: Option<String>,
    /// Collections returned by a successful probe.
    pub collections: Vec<String>,
    /// Error to return from the probe instead of the collections.
    pub probe_error: Option<DatabaseError>,
    /// Panic with this message when probed.
    pub probe_panic: Option<String>,
}

/// Mock database handle for testing.
#[derive(Debug, Clone, Default)]
pub struct MockDatabase {
    /// Mock configuration.
    config: MockConfig,
    /// Number of probe calls seen.
    probes: Arc<AtomicUsize>,
}

impl MockDatabase {
    /// Create a new mock handle with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock handle with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            probes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Report the given database name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Return these collections from the probe.
    pub fn with_collections<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.collections = collections.into_iter().map(Into::into).collect();
        self
    }

    /// Fail the probe with the given error.
    pub fn failing(mut self, error: DatabaseError) -> Self {
        self.config.probe_error = Some(error);
        self
    }

    /// Panic inside the probe.
    pub fn panicking(mut self, message: impl Into<String>) -> Self {
        self.config.probe_panic = Some(message.into());
        self
    }

    /// How many times the probe ran.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

impl DatabaseHandle for MockDatabase {
    fn name(&self) -> Option<String> {
        self.config.name.clone()
    }

    fn list_collection_names(&self) -> Result<Vec<String>, DatabaseError> {
        self.probes.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.config.probe_panic {
            panic!("{}", message);
        }

        match &self.config.probe_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.config.collections.clone()),
        }
    }
}
