//! Core data types for the dotlog note system
//!
//! A [`Note`] is one immutable (path, text, time) record. A [`Query`] is the
//! compiled form of a raw token list, and [`RenderMode`] is the closed set of
//! output transforms the dispatcher can apply to a result set.

use serde::{Deserialize, Serialize};

/// Number of decimal digits in a millisecond-epoch timestamp string
pub const TIME_WIDTH: usize = 13;

/// Number of leading digits covering whole seconds
pub const TIME_SECONDS_PREFIX: usize = 10;

/// One record in the store. Never mutated after creation; identity is the
/// whole tuple. `path` is relative to the configured root, with the empty
/// string denoting the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub path: String,
    pub text: String,
    /// Milliseconds since epoch as a fixed 13-digit decimal string, so
    /// lexical and numeric ordering coincide
    pub time: String,
}

impl Note {
    pub fn new(path: impl Into<String>, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            time: time.into(),
        }
    }

    /// Timestamp truncated to whole seconds, or None if the field is not a
    /// well-formed 13-digit string
    pub fn time_seconds(&self) -> Option<i64> {
        self.time.get(..TIME_SECONDS_PREFIX)?.parse().ok()
    }

    /// Timestamp in milliseconds, or None if malformed
    pub fn time_millis(&self) -> Option<i64> {
        self.time.get(..TIME_WIDTH)?.parse().ok()
    }
}

/// Location restriction compiled out of the token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Only notes whose path contains the resolved current project label
    CurrentProject,
    /// Only notes whose path contains the given fragment (case-sensitive)
    PathContains(String),
}

/// Compiled representation of a raw query token list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Lowercased substring filters, AND-combined over path or text
    pub terms: Vec<String>,
    pub scope: Option<Scope>,
    /// Restrict to notes newer than the 31-day lookback
    pub recency_window: bool,
    /// Collapse to one row per distinct path, most recent wins
    pub unique_by_path: bool,
}

/// Output transform applied per matched note. Exactly one is active per
/// invocation; Comment is the default when no marker token is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Human-readable annotation line, never executable
    #[default]
    Comment,
    /// Shell `cd` into the note's project directory (marker `S`)
    ChangeDir,
    /// Inspect the note's first word and open/edit/visit it (marker `O`)
    Open,
    /// Pipe the note text to the clipboard (marker `C`)
    Copy,
    /// Note text verbatim with a trailing timestamp (marker `R`)
    Raw,
    /// Reinterpret the tokens as content for a new note (marker `A`)
    Add,
}

impl RenderMode {
    /// The fixed marker table, in precedence order: when several marker
    /// tokens are present, the last table entry with a match wins.
    pub const MARKER_TABLE: [(&'static str, RenderMode); 5] = [
        ("S", RenderMode::ChangeDir),
        ("O", RenderMode::Open),
        ("C", RenderMode::Copy),
        ("R", RenderMode::Raw),
        ("A", RenderMode::Add),
    ];

    /// True if `token` is one of the recognized marker letters
    pub fn is_marker(token: &str) -> bool {
        Self::MARKER_TABLE.iter().any(|(m, _)| *m == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_prefixes() {
        let note = Note::new("proj", "text", "1700000000123");
        assert_eq!(note.time_seconds(), Some(1_700_000_000));
        assert_eq!(note.time_millis(), Some(1_700_000_000_123));
    }

    #[test]
    fn test_malformed_time() {
        let note = Note::new("proj", "text", "garbage");
        assert_eq!(note.time_seconds(), None);
        assert_eq!(note.time_millis(), None);
    }

    #[test]
    fn test_marker_table_membership() {
        assert!(RenderMode::is_marker("S"));
        assert!(RenderMode::is_marker("A"));
        assert!(!RenderMode::is_marker("s"));
        assert!(!RenderMode::is_marker("X"));
    }
}
