//! Diagnostic error taxonomy for the switch store.
//!
//! None of these escape a `SwitchStore` operation. They are built at the
//! point of failure and rendered into a log event (and, for reloads, into the
//! returned `ReloadOutcome`).

use thiserror::Error;

/// Things that can go wrong while loading or reading switches.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The reload input was empty or whitespace only.
    #[error("switch config is blank")]
    BlankInput,

    /// A line did not have the `key=value` shape.
    #[error("corrupt switch record {line:?}")]
    MalformedLine { line: String },

    /// A stored value could not be parsed as the requested type.
    #[error("corrupt switch value {key}={value} (expected {expected})")]
    CorruptValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// The input stream failed while being read.
    #[error("failed to read switch source: {0}")]
    SourceRead(#[from] std::io::Error),
}
