//! Switch sources.
//!
//! # Data Flow
//! ```text
//! switch file on disk
//!     → file.rs (open, buffered read)
//!     → SwitchStore::reload_from_reader
//!
//! On change:
//!     watcher.rs detects modify/create
//!     → file.rs reloads
//!     → store publishes new generation
//! ```
//!
//! # Design Decisions
//! - A source failure never touches the published switches
//! - The watcher calls the store directly; there is no extra queue

pub mod file;
pub mod watcher;

pub use file::reload_from_file;
pub use watcher::SwitchFileWatcher;
