//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! switch store, source, admin API produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (reload counters, table gauges)
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Switch diagnostics all share one tracing target so they can be filtered
//! - Metric calls are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
