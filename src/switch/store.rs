//! The switch store: one published table, swapped atomically on reload.
//!
//! # Concurrency
//! - `reload` builds the next table privately, then publishes it with a
//!   single compare-and-swap; readers see the old table or the new one,
//!   never a mix and never a half-built one
//! - Reads are lock-free loads of the current `Arc<SwitchTable>`
//! - Two racing reloads: the last one to publish wins, and generations
//!   still increase in publication order

use std::io::BufRead;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Serialize;

use crate::observability::metrics;
use crate::switch::error::SwitchError;
use crate::switch::parser::{parse_switches, ParsedSwitches};
use crate::switch::table::SwitchTable;
use crate::switch::value::FromSwitch;
use crate::switch::LOG_TARGET;

/// What a reload call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReloadOutcome {
    /// Input was blank; the current table was left untouched.
    Skipped,
    /// A new table was published.
    Applied {
        generation: u64,
        switches: usize,
        corrupt_lines: Vec<String>,
    },
    /// The source failed mid-read; the current table was left untouched.
    Aborted { reason: String },
}

impl ReloadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReloadOutcome::Applied { .. })
    }
}

/// Hot-reloadable switch store.
///
/// Owned by the composition root and shared as `Arc<SwitchStore>`.
#[derive(Debug)]
pub struct SwitchStore {
    current: ArcSwap<SwitchTable>,
}

impl SwitchStore {
    /// Create a store holding the empty generation-0 table.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(SwitchTable::empty()),
        }
    }

    /// Replace all switches with the contents of `raw`.
    pub fn reload(&self, raw: &str) -> ReloadOutcome {
        if raw.trim().is_empty() {
            tracing::error!(target: LOG_TARGET, "{}", SwitchError::BlankInput);
            metrics::record_reload("skipped");
            return ReloadOutcome::Skipped;
        }

        tracing::info!(target: LOG_TARGET, raw_config = %raw, "[switch-config] reloading switches");

        let ParsedSwitches { builder, corrupt } = parse_switches(raw);
        let corrupt_lines: Vec<String> = corrupt
            .into_iter()
            .map(|err| {
                tracing::error!(target: LOG_TARGET, error = %err, "skipping corrupt switch record");
                match err {
                    SwitchError::MalformedLine { line } => line,
                    other => other.to_string(),
                }
            })
            .collect();

        // The generation is derived from the table being replaced, so racing
        // reloads still publish strictly increasing generations.
        let table = loop {
            let current = self.current.load();
            let next = Arc::new(builder.clone().build(current.generation() + 1));
            let previous = self.current.compare_and_swap(&current, Arc::clone(&next));
            if Arc::ptr_eq(&previous, &current) {
                break next;
            }
        };
        let generation = table.generation();
        let switches = table.len();

        metrics::record_reload("applied");
        metrics::record_corrupt_lines(corrupt_lines.len());
        metrics::record_table(generation, switches);

        tracing::info!(
            target: LOG_TARGET,
            generation,
            count = switches,
            corrupt = corrupt_lines.len(),
            switches = %table,
            "[reload-switches] published"
        );

        ReloadOutcome::Applied {
            generation,
            switches,
            corrupt_lines,
        }
    }

    /// Read the whole of `reader` and reload from it.
    ///
    /// An I/O error aborts the reload before anything is published.
    pub fn reload_from_reader<R: BufRead>(&self, reader: R) -> ReloadOutcome {
        let mut raw = String::new();
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    raw.push_str(&line);
                    raw.push('\n');
                }
                Err(e) => {
                    let err = SwitchError::SourceRead(e);
                    tracing::warn!(
                        target: LOG_TARGET,
                        error = %err,
                        generation = self.generation(),
                        "[reload-switches] aborted, keeping current switches"
                    );
                    metrics::record_reload("aborted");
                    return ReloadOutcome::Aborted {
                        reason: err.to_string(),
                    };
                }
            }
        }
        self.reload(&raw)
    }

    /// Read `key` as `T`, or `default` when absent or unparseable.
    pub fn get<T: FromSwitch>(&self, key: &str, default: T) -> T {
        let table = self.current.load();
        let Some(raw) = table.get(key) else {
            return default;
        };

        match T::from_switch(raw) {
            Some(value) => value,
            None => {
                let err = SwitchError::CorruptValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                    expected: T::KIND,
                };
                tracing::error!(target: LOG_TARGET, error = %err, "using default switch value");
                metrics::record_corrupt_value(T::KIND);
                default
            }
        }
    }

    pub fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    pub fn get_integer(&self, key: &str, default: i32) -> i32 {
        self.get(key, default)
    }

    /// Raw string value; blank counts as unset.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.current.load().get(key) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => default.to_string(),
        }
    }

    /// Current switches rendered as `k1=v1; k2=v2`.
    pub fn snapshot(&self) -> String {
        self.current.load().render()
    }

    /// The currently published table.
    pub fn table(&self) -> Arc<SwitchTable> {
        self.current.load_full()
    }

    pub fn generation(&self) -> u64 {
        self.current.load().generation()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }
}

impl Default for SwitchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switch::keys;
    use std::io::{self, BufReader, Read};

    #[test]
    fn test_well_formed_round_trip() {
        let store = SwitchStore::new();
        store.reload("isFixedPolling = true\n fixedDelayTime=  500\nname=alpha beta ");

        assert_eq!(store.get_string(keys::FIXED_POLLING, ""), "true");
        assert_eq!(store.get_string(keys::FIXED_DELAY_TIME, ""), "500");
        assert_eq!(store.get_string("name", ""), "alpha beta");
    }

    #[test]
    fn test_blank_reload_is_noop() {
        let store = SwitchStore::new();
        store.reload("a=1");
        let before = store.table();

        assert_eq!(store.reload(""), ReloadOutcome::Skipped);
        assert_eq!(store.reload("   \n\t "), ReloadOutcome::Skipped);

        assert!(Arc::ptr_eq(&before, &store.table()));
        assert_eq!(store.generation(), 1);
        assert_eq!(store.snapshot(), "a=1");
    }

    #[test]
    fn test_comment_line_ignored() {
        let store = SwitchStore::new();
        store.reload("# isFixedPolling=true\nfixedDelayTime=3");

        assert!(!store.get_boolean(keys::FIXED_POLLING, false));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_malformed_lines_do_not_block_siblings() {
        let store = SwitchStore::new();
        let outcome = store.reload("novalue\na=b=c\n=b\na=\ngood=1\nother = yes");

        match outcome {
            ReloadOutcome::Applied { switches, corrupt_lines, .. } => {
                assert_eq!(switches, 2);
                assert_eq!(corrupt_lines, vec!["novalue", "a=b=c", "=b", "a="]);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(store.get_integer("good", 0), 1);
        assert_eq!(store.get_string("other", ""), "yes");
    }

    #[test]
    fn test_boolean_fallback() {
        let store = SwitchStore::new();
        assert!(store.get_boolean("absentKey", true));

        store.reload("absentKey=notabool");
        assert!(store.get_boolean("absentKey", true));
        assert!(!store.get_boolean("absentKey", false));

        store.reload("absentKey=FALSE");
        assert!(!store.get_boolean("absentKey", true));
    }

    #[test]
    fn test_integer_fallback() {
        let store = SwitchStore::new();
        assert_eq!(store.get_integer("x", 5), 5);

        store.reload("x=42");
        assert_eq!(store.get_integer("x", 5), 42);

        store.reload("x=abc");
        assert_eq!(store.get_integer("x", 5), 5);

        store.reload("x=99999999999");
        assert_eq!(store.get_integer("x", 5), 5);
        assert_eq!(store.get::<i64>("x", 5), 99_999_999_999);
    }

    #[test]
    fn test_string_default_when_absent() {
        let store = SwitchStore::new();
        assert_eq!(store.get_string("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_snapshot_order() {
        let store = SwitchStore::new();
        assert_eq!(store.snapshot(), "");

        store.reload("a=1\nb=2");
        assert_eq!(store.snapshot(), "a=1; b=2");
    }

    #[test]
    fn test_reload_replaces_whole_table() {
        let store = SwitchStore::new();
        store.reload("a=1\nb=2");
        store.reload("c=3");

        assert_eq!(store.snapshot(), "c=3");
        assert_eq!(store.get_string("a", "gone"), "gone");
    }

    #[test]
    fn test_only_corrupt_lines_publishes_empty_table() {
        let store = SwitchStore::new();
        store.reload("a=1");

        let outcome = store.reload("# nothing here\nbroken");
        assert!(outcome.is_applied());
        assert!(store.is_empty());
        assert_eq!(store.generation(), 2);
    }

    #[test]
    fn test_generation_advances_on_apply_only() {
        let store = SwitchStore::new();
        assert_eq!(store.generation(), 0);

        store.reload("a=1");
        store.reload(" ");
        store.reload("a=2");
        assert_eq!(store.generation(), 2);
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "source went away"));
            }
            self.served = true;
            let chunk = b"a=changed\nb=";
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn test_reader_failure_keeps_previous_table() {
        let store = SwitchStore::new();
        store.reload("a=1\nb=2");

        let outcome = store.reload_from_reader(BufReader::new(FailingReader { served: false }));
        match outcome {
            ReloadOutcome::Aborted { reason } => assert!(reason.contains("source went away")),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(store.snapshot(), "a=1; b=2");
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_reload_from_reader() {
        let store = SwitchStore::new();
        let outcome = store.reload_from_reader("a=1\r\n# c\nb=2\n".as_bytes());

        assert!(outcome.is_applied());
        assert_eq!(store.snapshot(), "a=1; b=2");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(ReloadOutcome::Skipped).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "skipped" }));

        let json = serde_json::to_value(ReloadOutcome::Applied {
            generation: 3,
            switches: 1,
            corrupt_lines: vec!["x".into()],
        })
        .unwrap();
        assert_eq!(json["status"], "applied");
        assert_eq!(json["generation"], 3);
        assert_eq!(json["corrupt_lines"][0], "x");
    }
}
