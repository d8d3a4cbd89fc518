//! Metrics collection and exposition.
//!
//! # Metrics
//! - `rest_http_request_duration_seconds` (histogram): request latency,
//!   labeled by `method`, `endpoint`, `status`
//!
//! # Design Decisions
//! - One process-global Prometheus recorder, installed on first use
//! - Histogram buckets tuned for typical web latencies
//! - Label values pass through the scrubber before being recorded

use metrics::{describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use thiserror::Error;

use crate::observability::scrub::Scrubber;

/// Request duration histogram name.
pub const REQUEST_DURATION_SECONDS: &str = "rest_http_request_duration_seconds";

/// Buckets: 1ms to 10s, tuned for typical web latencies.
const DURATION_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

static RECORDER: OnceLock<Result<PrometheusHandle, MetricsInitError>> = OnceLock::new();
static SCRUBBER: OnceLock<Scrubber> = OnceLock::new();

/// Error installing the global metrics recorder.
#[derive(Debug, Clone, Error)]
#[error("failed to install metrics recorder: {0}")]
pub struct MetricsInitError(String);

/// Install the process-global Prometheus recorder.
///
/// Idempotent: the first call installs, later calls return the same handle.
/// The handle renders the registry in Prometheus text format.
pub fn init_metrics() -> Result<PrometheusHandle, MetricsInitError> {
    let result = RECORDER.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .set_buckets(DURATION_BUCKETS)
            .map_err(|e| MetricsInitError(e.to_string()))?
            .install_recorder()
            .map_err(|e| MetricsInitError(e.to_string()))?;

        describe_histogram!(
            REQUEST_DURATION_SECONDS,
            Unit::Seconds,
            "Duration of HTTP requests in seconds."
        );

        Ok(handle)
    });

    result.clone()
}

/// Get the recorder handle if one was installed.
pub fn handle() -> Option<PrometheusHandle> {
    RECORDER.get().and_then(|r| r.as_ref().ok()).cloned()
}

/// Record one request duration observation, in seconds.
///
/// Method and endpoint labels are scrubbed before recording. A no-op when
/// no recorder is installed.
pub fn observe_request_duration(method: &str, endpoint: &str, status: u16, seconds: f64) {
    let scrubber = SCRUBBER.get_or_init(Scrubber::new);

    histogram!(
        REQUEST_DURATION_SECONDS,
        "method" => scrubber.scrub(method),
        "endpoint" => scrubber.scrub(endpoint),
        "status" => status.to_string(),
    )
    .record(seconds);
}
