//! Daemon configuration subsystem.
//!
//! # Data Flow
//! ```text
//! switchd.toml
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → SwitchdConfig (validated, immutable)
//! ```
//!
//! This configures the daemon around the store (where switches come from,
//! admin API, logging). The switches themselves live in a separate blob
//! handled by the `switch` and `source` modules.
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{AdminConfig, ObservabilityConfig, SourceConfig, SwitchdConfig};
