//! Metrics collection and Prometheus export.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder.
///
/// Call once at startup, before any metric is recorded. Panics if called
/// more than once.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

/// Current metrics in Prometheus text format, for `/metrics`.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Which logging endpoint produced a record in `logs`.
#[derive(Debug, Clone, Copy)]
pub enum LogKind {
    Action,
    Rating,
}

impl LogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::Action => "action",
            LogKind::Rating => "rating",
        }
    }
}

pub fn record_log_written(kind: LogKind) {
    metrics::counter!("recipe_logs_written_total", "kind" => kind.as_str()).increment(1);
}

pub fn record_recipes_served(count: usize) {
    metrics::counter!("recipes_served_total").increment(count as u64);
}
