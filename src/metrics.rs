//! Prometheus metrics for request latency and diagnostics outcomes.
//!
//! Metric macros are no-ops until a recorder is installed, so library code
//! can record unconditionally.

use std::time::{Duration, Instant};

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Diagnostics runs counter metric name.
pub const METRIC_DIAGNOSTICS_RUNS: &str = "diagnostics_runs_total";

/// Install the Prometheus recorder and register metric descriptions.
///
/// Call this once at startup. The returned handle renders the scrape body.
pub fn install() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// How often histogram buckets are drained between scrapes.
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Run recorder upkeep on a fixed interval for the life of the runtime.
pub fn spawn_upkeep(handle: PrometheusHandle) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(UPKEEP_INTERVAL);
        loop {
            interval.tick().await;
            handle.run_upkeep();
        }
    })
}

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(
        METRIC_DIAGNOSTICS_RUNS,
        "Total number of diagnostics runs by database outcome"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency and count.
pub fn record_http_request(start: Instant, endpoint: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Increment diagnostics runs counter.
pub fn inc_diagnostics_runs(outcome: &'static str) {
    counter!(METRIC_DIAGNOSTICS_RUNS, "outcome" => outcome).increment(1);
}
