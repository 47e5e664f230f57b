//! Metrics collection and exposition.
//!
//! # Metrics
//! - `switch_reloads_total` (counter): reload calls by outcome
//!   (`applied`, `skipped`, `aborted`)
//! - `switch_corrupt_lines_total` (counter): lines skipped as corrupt
//! - `switch_corrupt_values_total` (counter): typed reads that fell back to
//!   the default, by requested kind
//! - `switch_entries` (gauge): entries in the published table
//! - `switch_generation` (gauge): generation of the published table

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_reload(outcome: &'static str) {
    metrics::counter!("switch_reloads_total", "outcome" => outcome).increment(1);
}

pub fn record_corrupt_lines(count: usize) {
    if count > 0 {
        metrics::counter!("switch_corrupt_lines_total").increment(count as u64);
    }
}

pub fn record_corrupt_value(kind: &'static str) {
    metrics::counter!("switch_corrupt_values_total", "kind" => kind).increment(1);
}

pub fn record_table(generation: u64, entries: usize) {
    metrics::gauge!("switch_generation").set(generation as f64);
    metrics::gauge!("switch_entries").set(entries as f64);
}
