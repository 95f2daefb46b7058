//! Prometheus metrics for the server

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, register_int_gauge,
    register_int_gauge_vec, HistogramVec, IntCounter, IntCounterVec, IntGauge, IntGaugeVec,
};
use std::sync::Mutex;

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "scoped_data_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "scoped_data_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "scoped_data_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Request Scope Metrics

    /// Request scopes opened since start, caught up from the scope library on scrape
    pub static ref REQUEST_SCOPES_OPENED_TOTAL: IntCounter = register_int_counter!(
        "scoped_data_request_scopes_opened_total",
        "Total number of request scopes opened"
    )
    .expect("Failed to register REQUEST_SCOPES_OPENED_TOTAL");

    /// Request scopes currently alive, refreshed on scrape
    pub static ref REQUEST_SCOPES_ACTIVE: IntGauge = register_int_gauge!(
        "scoped_data_request_scopes_active",
        "Number of request scopes currently open"
    )
    .expect("Failed to register REQUEST_SCOPES_ACTIVE");
}

/// Map a request path onto a bounded set of labels.
pub fn sanitize_path(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "" => "/",
        "/api/data" => "/api/data",
        "/health" => "/health",
        "/metrics" => "/metrics",
        _ => "other",
    }
}

/// Serializes catch-up of the opened counter so two scrapes never add the same delta.
static OPENED_SYNC: Mutex<()> = Mutex::new(());

/// Copy process-wide scope counters into their collectors before a scrape.
pub fn refresh_scope_gauges() {
    let active = i64::try_from(scoped_data_scope::active_scopes()).unwrap_or(i64::MAX);
    REQUEST_SCOPES_ACTIVE.set(active);

    let _sync = OPENED_SYNC.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let opened = scoped_data_scope::opened_scopes();
    let recorded = REQUEST_SCOPES_OPENED_TOTAL.get();
    if opened > recorded {
        REQUEST_SCOPES_OPENED_TOTAL.inc_by(opened - recorded);
    }
}
