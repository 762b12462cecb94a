//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vendor_requests_total` (counter): requests by method, status
//! - `vendor_request_duration_seconds` (histogram): latency distribution
//! - `vendor_versions_registered` (gauge): size of the version table

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus exporter on `addr`. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one served request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    counter!("vendor_requests_total", &labels).increment(1);
    histogram!("vendor_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}

/// Publish the number of registered versions.
pub fn record_versions(vendor: &str, count: usize) {
    gauge!("vendor_versions_registered", "vendor" => vendor.to_string()).set(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_exporter_is_noop() {
        record_request("GET", 200, Instant::now());
        record_versions("acme.com", 2);
    }
}
