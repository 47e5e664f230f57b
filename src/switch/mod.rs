//! Switch (feature-flag) store subsystem.
//!
//! # Data Flow
//! ```text
//! raw switch blob (file, admin API, config push)
//!     → parser.rs (classify lines, split key=value)
//!     → table.rs (SwitchTableBuilder, off to the side)
//!     → store.rs (single atomic swap of Arc<SwitchTable>)
//!     → readers (get_boolean / get_integer / get_string / snapshot)
//! ```
//!
//! # Design Decisions
//! - A published table is immutable; every reload builds a new one
//! - Readers never lock; they load the current Arc through `ArcSwap`
//! - Bad input is logged and skipped, never returned to callers
//! - Typed reads fall back to the caller's default on any parse failure

pub mod error;
pub mod keys;
pub mod parser;
pub mod store;
pub mod table;
pub mod value;

pub use error::SwitchError;
pub use store::{ReloadOutcome, SwitchStore};
pub use table::{SwitchTable, SwitchTableBuilder};
pub use value::FromSwitch;

/// Tracing target for every switch diagnostic.
pub const LOG_TARGET: &str = "switch_store::switch";
