//! Switch blob parsing.
//!
//! # Format
//! ```text
//! # comment lines start with '#'
//! isFixedPolling=true
//! fixedPollingInertval = 10000
//! ```
//!
//! # Rules
//! - Blank lines and lines whose first non-blank character is `#` are ignored
//! - Key and value are split on `=` and trimmed
//! - Empty key, empty value, missing `=` or a second `=` make the line corrupt
//! - Corrupt lines are collected, never fatal
//! - Duplicate keys: the last value wins

use crate::switch::error::SwitchError;
use crate::switch::table::SwitchTableBuilder;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank or comment line.
    Ignored,
    /// A trimmed key/value pair.
    Entry { key: &'a str, value: &'a str },
}

/// Classify one line of a switch blob.
pub fn parse_line(line: &str) -> Result<Line<'_>, SwitchError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Line::Ignored);
    }

    let corrupt = || SwitchError::MalformedLine {
        line: line.to_string(),
    };

    let (key, value) = trimmed.split_once('=').ok_or_else(corrupt)?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() || value.contains('=') {
        return Err(corrupt());
    }

    Ok(Line::Entry { key, value })
}

/// Result of parsing a whole blob: the entries ready to publish and the
/// lines that were skipped as corrupt.
#[derive(Debug, Default)]
pub struct ParsedSwitches {
    pub builder: SwitchTableBuilder,
    pub corrupt: Vec<SwitchError>,
}

/// Parse every line of `raw` into a fresh builder.
pub fn parse_switches(raw: &str) -> ParsedSwitches {
    let mut parsed = ParsedSwitches::default();
    for line in raw.lines() {
        match parse_line(line) {
            Ok(Line::Entry { key, value }) => parsed.builder.insert(key, value),
            Ok(Line::Ignored) => {}
            Err(e) => parsed.corrupt.push(e),
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_trims() {
        assert_eq!(
            parse_line("  fixedDelayTime =  500 ").unwrap(),
            Line::Entry { key: "fixedDelayTime", value: "500" }
        );
    }

    #[test]
    fn test_blank_and_comments_ignored() {
        assert_eq!(parse_line("").unwrap(), Line::Ignored);
        assert_eq!(parse_line("   \t").unwrap(), Line::Ignored);
        assert_eq!(parse_line("# isFixedPolling=true").unwrap(), Line::Ignored);
        assert_eq!(parse_line("   #indented comment").unwrap(), Line::Ignored);
    }

    #[test]
    fn test_malformed_lines() {
        for line in ["novalue", "a=b=c", "=b", "a=", "a=   ", "  = "] {
            let err = parse_line(line).unwrap_err();
            match err {
                SwitchError::MalformedLine { line: l } => assert_eq!(l, line),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_switches_skips_corrupt_siblings() {
        let parsed = parse_switches("a=1\nnovalue\n# c=3\n\nb=2\r\nx=y=z\n");
        let table = parsed.builder.build(1);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), Some("1"));
        assert_eq!(table.get("b"), Some("2"));
        assert_eq!(parsed.corrupt.len(), 2);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let parsed = parse_switches("a=1\nb=2\na=3");
        let table = parsed.builder.build(1);

        assert_eq!(table.get("a"), Some("3"));
        assert_eq!(table.render(), "a=3; b=2");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let table = parse_switches("Flag=1\nflag=2").builder.build(1);
        assert_eq!(table.get("Flag"), Some("1"));
        assert_eq!(table.get("flag"), Some("2"));
    }
}
