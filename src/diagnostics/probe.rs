//! Database probing and report assembly.
//!
//! Each step against the collaborator is guarded on its own, so a failure in
//! one never keeps the rest of the report from being built. A panic while
//! listing collections counts as a failed listing; a panic anywhere earlier
//! is an unexpected failure.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use strum::{Display, IntoStaticStr};
use tracing::{debug, warn};

use crate::database::DatabaseModule;
use crate::error::{DatabaseError, ResolveError};
use crate::metrics;

use super::env::EnvSource;
use super::report::{
    marked, StatusReport, CONNECTED, DB_AVAILABLE, DB_MODULE_NOT_FOUND, DB_NOT_INITIALIZED,
    DB_WORKING, ERROR_MARKER, NAME_CONNECTED, URL_CONFIGURED, WARNING_MARKER,
};

/// Collections kept in the report.
pub const MAX_COLLECTIONS: usize = 10;
/// Characters of an error message kept in the report.
pub const MAX_ERROR_CHARS: usize = 50;

/// Result of the collection listing probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionProbe {
    /// Names as returned by the handle.
    Listed(Vec<String>),
    /// The handle reported an error.
    Failed(DatabaseError),
    /// The handle panicked.
    Panicked(String),
}

/// What probing the database collaborator found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// No database module at all.
    ModuleNotFound,
    /// Module present, handle null.
    Uninitialized,
    /// Live handle; `collections` is the probe result.
    Connected {
        name: Option<String>,
        collections: CollectionProbe,
    },
    /// Anything else that went wrong before the probe ran.
    Unexpected(String),
}

/// Coarse outcome, used as a metrics label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DatabaseState {
    NotFound,
    Uninitialized,
    Working,
    ProbeFailed,
    Error,
}

impl ProbeOutcome {
    /// Coarse state for this outcome.
    pub fn state(&self) -> DatabaseState {
        match self {
            Self::ModuleNotFound => DatabaseState::NotFound,
            Self::Uninitialized => DatabaseState::Uninitialized,
            Self::Connected { collections, .. } => match collections {
                CollectionProbe::Listed(_) => DatabaseState::Working,
                CollectionProbe::Failed(_) | CollectionProbe::Panicked(_) => {
                    DatabaseState::ProbeFailed
                }
            },
            Self::Unexpected(_) => DatabaseState::Error,
        }
    }
}

/// Probe the collaborator without letting anything escape.
pub fn probe_database(module: &dyn DatabaseModule) -> ProbeOutcome {
    let handle = match guarded(|| module.resolve()) {
        Ok(Ok(Some(handle))) => handle,
        Ok(Ok(None)) => return ProbeOutcome::Uninitialized,
        Ok(Err(ResolveError::NotFound)) => return ProbeOutcome::ModuleNotFound,
        Ok(Err(ResolveError::Failed(msg))) | Err(msg) => return ProbeOutcome::Unexpected(msg),
    };

    let name = match guarded(|| handle.name()) {
        Ok(name) => name,
        Err(msg) => return ProbeOutcome::Unexpected(msg),
    };

    let collections = match guarded(|| handle.list_collection_names()) {
        Ok(Ok(names)) => CollectionProbe::Listed(names),
        Ok(Err(err)) => CollectionProbe::Failed(err),
        Err(msg) => CollectionProbe::Panicked(msg),
    };

    ProbeOutcome::Connected { name, collections }
}

/// Fold a probe outcome into a report, then apply the environment checks.
pub fn build_report(outcome: &ProbeOutcome, env: &dyn EnvSource) -> StatusReport {
    let mut report = StatusReport::skeleton();

    match outcome {
        ProbeOutcome::ModuleNotFound => {
            report.database = DB_MODULE_NOT_FOUND.to_string();
        }
        ProbeOutcome::Uninitialized => {
            report.database = DB_NOT_INITIALIZED.to_string();
        }
        ProbeOutcome::Connected { name, collections } => {
            report.database = DB_AVAILABLE.to_string();
            report.database_url = Some(URL_CONFIGURED.to_string());
            report.database_name = Some(name.clone().unwrap_or_else(|| NAME_CONNECTED.to_string()));
            report.connection_status = CONNECTED.to_string();

            match collections {
                CollectionProbe::Listed(names) => {
                    report.collections = names.iter().take(MAX_COLLECTIONS).cloned().collect();
                    report.database = DB_WORKING.to_string();
                }
                CollectionProbe::Failed(err) => {
                    report.database = marked(WARNING_MARKER, &err.to_string(), MAX_ERROR_CHARS);
                }
                CollectionProbe::Panicked(msg) => {
                    report.database = marked(WARNING_MARKER, msg, MAX_ERROR_CHARS);
                }
            }
        }
        ProbeOutcome::Unexpected(msg) => {
            report.database = marked(ERROR_MARKER, msg, MAX_ERROR_CHARS);
        }
    }

    report.apply_env(env);
    report
}

/// Run the full diagnostics pass.
pub fn run(module: &dyn DatabaseModule, env: &dyn EnvSource) -> StatusReport {
    let outcome = probe_database(module);
    let state = outcome.state();

    match &outcome {
        ProbeOutcome::Connected {
            collections: CollectionProbe::Failed(err),
            ..
        } => warn!("Database probe failed: {}", err),
        ProbeOutcome::Connected {
            collections: CollectionProbe::Panicked(msg),
            ..
        } => warn!("Database probe panicked: {}", msg),
        ProbeOutcome::Unexpected(msg) => {
            warn!("Database diagnostics hit an unexpected failure: {}", msg)
        }
        _ => debug!("Database diagnostics finished: {}", state),
    }

    metrics::inc_diagnostics_runs(state.into());

    build_report(&outcome, env)
}

fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
