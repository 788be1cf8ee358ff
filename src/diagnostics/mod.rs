//! Best-effort health snapshot of the optional database collaborator.
//!
//! This module handles:
//! - The [`StatusReport`] payload and its fixed labels
//! - Probing the database module step by step
//! - Environment presence checks, always applied last

pub mod env;
pub mod probe;
pub mod report;

pub use env::{EnvSource, ProcessEnv, StaticEnv};
pub use probe::{build_report, probe_database, run, CollectionProbe, DatabaseState, ProbeOutcome};
pub use report::StatusReport;
