//! Status report returned by the diagnostics endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::env::EnvSource;
use crate::error::Result;

/// `backend` value: reaching the handler means the process is serving.
pub const BACKEND_RUNNING: &str = "✅ Running";

/// Skeleton `database` value before any probing.
pub const DB_NOT_AVAILABLE: &str = "❌ Not Available";
/// No database module wired into this deployment.
pub const DB_MODULE_NOT_FOUND: &str = "❌ Database module not found (run enable-database first)";
/// Module present, handle never initialized.
pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
/// Handle present, probe not yet run.
pub const DB_AVAILABLE: &str = "✅ Available";
/// Handle present and the probe succeeded.
pub const DB_WORKING: &str = "✅ Connected & Working";

/// Prefix for probe failures.
pub const WARNING_MARKER: &str = "⚠️ ";
/// Prefix for unexpected failures.
pub const ERROR_MARKER: &str = "❌ ";

/// `database_url` once a live handle was found.
pub const URL_CONFIGURED: &str = "✅ Configured";
/// `database_name` when the handle has no name of its own.
pub const NAME_CONNECTED: &str = "✅ Connected";

/// Environment value present.
pub const ENV_SET: &str = "✅ Set";
/// Environment value missing or empty.
pub const ENV_NOT_SET: &str = "❌ Not Set";

pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

/// Environment key holding the database connection string.
pub const DATABASE_URL_KEY: &str = "DATABASE_URL";
/// Environment key holding the database name.
pub const DATABASE_NAME_KEY: &str = "DATABASE_NAME";

/// Snapshot of backend and database health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusReport {
    /// Always "✅ Running".
    #[schema(example = "✅ Running")]
    pub backend: String,
    /// Database state label or truncated error.
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    /// Whether `DATABASE_URL` is set.
    #[schema(example = "✅ Set")]
    pub database_url: Option<String>,
    /// Whether `DATABASE_NAME` is set.
    #[schema(example = "❌ Not Set")]
    pub database_name: Option<String>,
    /// "Connected" or "Not Connected".
    #[schema(example = "Connected")]
    pub connection_status: String,
    /// Up to the first 10 collection names.
    pub collections: Vec<String>,
}

impl StatusReport {
    /// Report before anything has been probed.
    pub fn skeleton() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DB_NOT_AVAILABLE.to_string(),
            database_url: None,
            database_name: None,
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }

    /// Overwrite the two presence fields from the environment.
    ///
    /// Runs last, after whatever the database probe assigned.
    pub fn apply_env(&mut self, env: &dyn EnvSource) {
        self.database_url = Some(presence(env.is_set(DATABASE_URL_KEY)).to_string());
        self.database_name = Some(presence(env.is_set(DATABASE_NAME_KEY)).to_string());
    }

    /// Pretty-printed JSON, as printed by the `diagnose` command.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether the report says the probe succeeded.
    pub fn is_working(&self) -> bool {
        self.database == DB_WORKING
    }
}

fn presence(set: bool) -> &'static str {
    if set {
        ENV_SET
    } else {
        ENV_NOT_SET
    }
}

/// Prefix a message with a marker, keeping at most `max` characters of it.
pub fn marked(marker: &str, message: &str, max: usize) -> String {
    format!("{}{}", marker, truncate_chars(message, max))
}

/// Cut `s` to at most `max` characters without splitting one.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::env::StaticEnv;

    #[test]
    fn skeleton_defaults() {
        let report = StatusReport::skeleton();
        assert_eq!(report.backend, BACKEND_RUNNING);
        assert_eq!(report.database, DB_NOT_AVAILABLE);
        assert_eq!(report.connection_status, NOT_CONNECTED);
        assert!(report.database_url.is_none());
        assert!(report.collections.is_empty());
    }

    #[test]
    fn apply_env_overwrites_fields() {
        let mut report = StatusReport::skeleton();
        report.database_url = Some(URL_CONFIGURED.to_string());
        report.database_name = Some("kir".to_string());

        report.apply_env(&StaticEnv::from_pairs([(DATABASE_NAME_KEY, "kir")]));

        assert_eq!(report.database_url.as_deref(), Some(ENV_NOT_SET));
        assert_eq!(report.database_name.as_deref(), Some(ENV_SET));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_chars("abc", 50), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn marked_stays_within_bound() {
        let long = "x".repeat(200);
        let text = marked(WARNING_MARKER, &long, 50);
        assert_eq!(text.chars().count(), 53);
        assert!(text.starts_with(WARNING_MARKER));
    }

    #[test]
    fn not_initialized_label_keeps_double_space() {
        assert_eq!(DB_NOT_INITIALIZED, "⚠\u{fe0f}  Available but not initialized");
        assert!(DB_NOT_INITIALIZED.contains("not initialized"));
    }

    #[test]
    fn pretty_json_lists_every_field() {
        let mut report = StatusReport::skeleton();
        report.apply_env(&StaticEnv::new());
        let text = report.to_pretty_json().unwrap();

        assert!(text.contains("\n  \"backend\": \"✅ Running\""));
        assert!(text.contains("\"database_url\": \"❌ Not Set\""));
        let parsed: StatusReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn serializes_null_presence_fields() {
        let json = serde_json::to_value(StatusReport::skeleton()).unwrap();
        assert!(json["database_url"].is_null());
        assert_eq!(json["collections"], serde_json::json!([]));
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
