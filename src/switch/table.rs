//! Immutable switch table.
//!
//! A `SwitchTable` is built once by a `SwitchTableBuilder` and never
//! modified after it is handed to the store. Entry order is the order in
//! which keys were first inserted.

use std::collections::HashMap;
use std::fmt;

/// Separator between entries in the rendered snapshot.
pub const SNAPSHOT_SEPARATOR: &str = "; ";

/// Accumulates entries for the next table.
#[derive(Debug, Default, Clone)]
pub struct SwitchTableBuilder {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SwitchTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a switch. An existing key keeps its position.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 = value.to_string(),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), value.to_string()));
            }
        }
    }

    /// Freeze the builder into a table tagged with `generation`.
    pub fn build(self, generation: u64) -> SwitchTable {
        SwitchTable {
            generation,
            entries: self.entries,
            index: self.index,
        }
    }
}

/// One published generation of switches.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwitchTable {
    generation: u64,
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SwitchTable {
    /// The empty generation-0 table a store starts with.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `k1=v1; k2=v2` in insertion order.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SwitchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(SNAPSHOT_SEPARATOR)?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
