//! Reloading switches from a file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::observability::metrics;
use crate::switch::{ReloadOutcome, SwitchError, SwitchStore, LOG_TARGET};

/// Reload `store` from the switch file at `path`.
///
/// A file that cannot be opened aborts the reload and keeps the current
/// switches.
pub fn reload_from_file(store: &SwitchStore, path: &Path) -> ReloadOutcome {
    match File::open(path) {
        Ok(file) => {
            tracing::debug!(target: LOG_TARGET, path = %path.display(), "Reading switch file");
            store.reload_from_reader(BufReader::new(file))
        }
        Err(e) => {
            let err = SwitchError::SourceRead(e);
            tracing::warn!(
                target: LOG_TARGET,
                path = %path.display(),
                error = %err,
                "[reload-switches] aborted, keeping current switches"
            );
            metrics::record_reload("aborted");
            ReloadOutcome::Aborted {
                reason: err.to_string(),
            }
        }
    }
}
