//! Observability module for request metrics.
//!
//! Structured logging goes through `tracing` directly; this module adds the
//! counters the health endpoint reports.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
