//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::content::{AchievementRecord, SiteContent, ACHIEVEMENTS, SITE_CONTENT};
use crate::database::{DatabaseBinding, DatabaseModule};
use crate::diagnostics::{self, EnvSource, ProbeOutcome, ProcessEnv, StatusReport};
use crate::metrics;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Optional database collaborator probed by `/test`.
    pub database: Arc<dyn DatabaseModule>,
    /// Where `/test` reads environment presence from.
    pub env: Arc<dyn EnvSource>,
    /// Prometheus scrape handle, if a recorder was installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state with no database module and the process environment.
    pub fn new() -> Self {
        Self {
            database: Arc::new(DatabaseBinding::Missing),
            env: Arc::new(ProcessEnv),
            metrics: None,
        }
    }

    /// Use the given database module.
    pub fn with_database<M>(mut self, database: M) -> Self
    where
        M: DatabaseModule + 'static,
    {
        self.database = Arc::new(database);
        self
    }

    /// Use the given environment source.
    pub fn with_env<E>(mut self, env: E) -> Self
    where
        E: EnvSource + 'static,
    {
        self.env = Arc::new(env);
        self
    }

    /// Expose metrics through this handle.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain greeting response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Site content response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SiteResponse {
    pub content: SiteContent,
}

/// Achievements response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AchievementsResponse {
    pub items: Vec<AchievementRecord>,
}

/// Root greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "general",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the KIR MAN 1 HST backend!".to_string(),
    })
}

/// API greeting.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "general",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

/// Database diagnostics - always returns 200.
///
/// The probe is a blocking call into the collaborator, so it runs on the
/// blocking pool.
#[utoipa::path(
    get,
    path = "/test",
    tag = "diagnostics",
    responses((status = 200, description = "Backend and database status", body = StatusReport))
)]
pub async fn test_database(State(state): State<AppState>) -> Json<StatusReport> {
    let database = Arc::clone(&state.database);
    let env = Arc::clone(&state.env);

    let report = tokio::task::spawn_blocking(move || diagnostics::run(database.as_ref(), env.as_ref()))
        .await
        .unwrap_or_else(|e| {
            warn!("Diagnostics task failed: {}", e);
            diagnostics::build_report(&ProbeOutcome::Unexpected(e.to_string()), state.env.as_ref())
        });

    debug!("Diagnostics report: database={}", report.database);
    Json(report)
}

/// Community profile.
#[utoipa::path(
    get,
    path = "/api/site",
    tag = "content",
    responses((status = 200, description = "Site content", body = SiteResponse))
)]
pub async fn site_content() -> Json<SiteResponse> {
    Json(SiteResponse {
        content: SITE_CONTENT.clone(),
    })
}

/// Achievement list.
#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "content",
    responses((status = 200, description = "Achievements", body = AchievementsResponse))
)]
pub async fn achievements() -> Json<AchievementsResponse> {
    Json(AchievementsResponse {
        items: ACHIEVEMENTS.clone(),
    })
}

/// Prometheus scrape endpoint - 404 when metrics are disabled.
pub async fn metrics_scrape(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Middleware recording latency per matched route.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    metrics::record_http_request(start, &endpoint, response.status().as_u16());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MockDatabase;
    use crate::diagnostics::StaticEnv;

    #[tokio::test]
    async fn test_database_with_missing_module() {
        let state = AppState::new().with_env(StaticEnv::new());
        let Json(report) = test_database(State(state)).await;
        assert!(report.database.contains("not found"));
        assert_eq!(report.database_url.as_deref(), Some("❌ Not Set"));
    }

    #[tokio::test]
    async fn test_database_with_ready_handle() {
        let db = MockDatabase::new().with_collections(["anggota", "kegiatan"]);
        let state = AppState::new()
            .with_database(DatabaseBinding::ready(db))
            .with_env(StaticEnv::from_pairs([("DATABASE_URL", "mongodb://db"), ("DATABASE_NAME", "kir")]));

        let Json(report) = test_database(State(state)).await;

        assert_eq!(report.collections, vec!["anggota", "kegiatan"]);
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.database_name.as_deref(), Some("✅ Set"));
    }

    #[tokio::test]
    async fn metrics_disabled_returns_404() {
        let response = metrics_scrape(State(AppState::new())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
