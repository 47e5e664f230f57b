//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

/// A uniquely named file in the system temp dir, removed on drop.
pub struct TempSwitchFile {
    pub path: PathBuf,
}

impl TempSwitchFile {
    pub fn new(contents: &str) -> Self {
        let n = NEXT_FILE.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "switch-store-test-{}-{}.conf",
            std::process::id(),
            n
        ));
        std::fs::write(&path, contents).unwrap();
        Self { path }
    }

    pub fn write(&self, contents: &str) {
        std::fs::write(&self.path, contents).unwrap();
    }
}

impl Drop for TempSwitchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// A blob whose every entry carries the same marker, so a reader can tell
/// whether a table it sees came from a single reload.
pub fn uniform_blob(marker: u64, keys: usize) -> String {
    (0..keys)
        .map(|i| format!("key{}={}", i, marker))
        .collect::<Vec<_>>()
        .join("\n")
}
