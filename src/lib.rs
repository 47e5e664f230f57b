//! Hot-reloadable switch (feature-flag) store.
//!
//! A `SwitchStore` holds one immutable table of `key=value` switches.
//! `reload` parses a whole text blob and swaps the table in atomically;
//! typed getters fall back to the caller's default on missing or corrupt
//! values and never fail.
//!
//! ```
//! use switch_store::SwitchStore;
//!
//! let store = SwitchStore::new();
//! store.reload("isFixedPolling=true\nfixedDelayTime=500\n# comment");
//!
//! assert!(store.get_boolean("isFixedPolling", false));
//! assert_eq!(store.get_integer("fixedDelayTime", 0), 500);
//! assert_eq!(store.snapshot(), "isFixedPolling=true; fixedDelayTime=500");
//! ```

// Core
pub mod switch;

// Switch delivery
pub mod admin;
pub mod source;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::SwitchdConfig;
pub use switch::{ReloadOutcome, SwitchStore, SwitchTable};
