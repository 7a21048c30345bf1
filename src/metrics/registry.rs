//! Metrics Registry Module
//!
//! Owns the Prometheus registry and the HTTP request metric families.

use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::error::Result;

/// Latency histogram buckets in seconds.
const DURATION_BUCKETS: &[f64] = &[0.05, 0.1, 0.3, 1.0, 2.0, 5.0];

// == HTTP Metrics ==
/// Request counters and latency histograms, labeled by
/// `(method, route, status_code)`.
///
/// On Linux the registry also carries the default process collector
/// (CPU, memory, open fds), so the exposition includes process-level
/// metrics alongside the HTTP families.
pub struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
}

impl HttpMetrics {
    // == Constructor ==
    /// Creates a registry with all metric families registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "route", "status_code"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests in seconds",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route", "status_code"],
        )?;
        registry.register(Box::new(request_duration_seconds.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
        })
    }

    // == Observe Request ==
    /// Records one completed request: counter increment plus a latency
    /// observation, both labeled by method, route, and status code.
    pub fn observe_request(&self, method: &str, route: &str, status_code: u16, seconds: f64) {
        let status = status_code.to_string();
        self.requests_total
            .with_label_values(&[method, route, &status])
            .inc();
        self.request_duration_seconds
            .with_label_values(&[method, route, &status])
            .observe(seconds);
    }

    // == Render ==
    /// Renders the full registry as Prometheus text exposition.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let body = encoder.encode_to_string(&self.registry.gather())?;
        Ok(body)
    }
}
