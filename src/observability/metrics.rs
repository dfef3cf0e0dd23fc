//! Request counters.
//!
//! Lightweight in-process metrics for the HTTP surface, reported on the
//! health endpoint and logged per request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters shared by every handler.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    requests_total: Arc<AtomicU64>,
    client_errors_total: Arc<AtomicU64>,
    server_errors_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            client_errors_total: Arc::new(AtomicU64::new(0)),
            server_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track one completed request by operation name and status code.
    pub fn track_request(&self, operation: &str, status: u16, duration_ms: u128) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        match status {
            400..=499 => {
                self.client_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            500..=599 => {
                self.server_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }

        tracing::debug!(
            operation = %operation,
            status = status,
            duration_ms = duration_ms,
            "Request completed"
        );
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn client_errors_total(&self) -> u64 {
        self.client_errors_total.load(Ordering::Relaxed)
    }

    pub fn server_errors_total(&self) -> u64 {
        self.server_errors_total.load(Ordering::Relaxed)
    }

    /// Client and server errors combined.
    pub fn errors_total(&self) -> u64 {
        self.client_errors_total() + self.server_errors_total()
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Stop the timer and record the request against `metrics`.
    pub fn finish(self, metrics: &MetricsTracker, status: u16) {
        let duration_ms = self.start.elapsed().as_millis();
        metrics.track_request(self.operation, status, duration_ms);
    }
}
