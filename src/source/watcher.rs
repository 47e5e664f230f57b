//! Switch file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::source::file::reload_from_file;
use crate::switch::SwitchStore;

/// A watcher that reloads the store whenever the switch file changes.
///
/// Every modify event triggers a reload, so a writer that truncates and
/// then writes in chunks can publish a partial switch set. Writers should
/// replace the file atomically (write a temp file, then rename it over).
pub struct SwitchFileWatcher {
    path: PathBuf,
    store: Arc<SwitchStore>,
    poll_interval: Duration,
}

impl SwitchFileWatcher {
    /// Create a new SwitchFileWatcher.
    pub fn new(path: &Path, store: Arc<SwitchStore>, poll_interval: Duration) -> Self {
        Self {
            path: path.to_path_buf(),
            store,
            poll_interval,
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let store = Arc::clone(&self.store);
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = %path.display(), "Switch file change detected, reloading...");
                        let outcome = reload_from_file(&store, &path);
                        tracing::debug!(?outcome, "Switch file reload finished");
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(self.poll_interval),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Switch file watcher started");
        Ok(watcher)
    }
}
