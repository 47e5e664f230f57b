//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the one `SwitchStore` for the process
//! - Load the initial switches from the configured file
//! - Start the file watcher when asked to
//!
//! # Design Decisions
//! - A missing or unreadable switch file is not fatal; the store starts empty
//!   and can be filled through the admin API
//! - A watcher that cannot be installed (for example because the file does
//!   not exist yet) is fatal

use std::sync::Arc;
use std::time::Duration;

use notify::RecommendedWatcher;

use crate::config::SourceConfig;
use crate::source::{reload_from_file, SwitchFileWatcher};
use crate::switch::{ReloadOutcome, SwitchStore};

/// A store with its initial switches loaded, plus the watcher keeping it
/// current (if any). Dropping the watcher stops hot reload.
pub struct Bootstrapped {
    pub store: Arc<SwitchStore>,
    pub watcher: Option<RecommendedWatcher>,
}

pub fn bootstrap_store(source: &SourceConfig) -> Result<Bootstrapped, notify::Error> {
    let store = Arc::new(SwitchStore::new());

    let Some(path) = source.path.as_deref() else {
        tracing::info!(data_id = %source.data_id, "No switch file configured, starting with empty switches");
        return Ok(Bootstrapped { store, watcher: None });
    };

    match reload_from_file(&store, path) {
        ReloadOutcome::Applied { generation, switches, .. } => tracing::info!(
            data_id = %source.data_id,
            path = %path.display(),
            generation,
            switches,
            "Initial switches loaded"
        ),
        outcome => tracing::warn!(
            data_id = %source.data_id,
            path = %path.display(),
            ?outcome,
            "Initial switch load did not apply, starting with empty switches"
        ),
    }

    let watcher = if source.watch {
        let watcher = SwitchFileWatcher::new(
            path,
            Arc::clone(&store),
            Duration::from_secs(source.poll_interval_secs),
        );
        Some(watcher.run()?)
    } else {
        None
    };

    Ok(Bootstrapped { store, watcher })
}
