//! Token-query compilation
//!
//! Raw argument tokens compile into a [`Query`] by a single ordered pass:
//! marker tokens set flags and are consumed, any other single-character
//! token is elided, everything else becomes a lowercase filter term. Mode
//! detection is a second, independent pass over the same raw tokens — the
//! single-letter mode markers would otherwise be swallowed by the elision
//! rule, and the two passes deliberately do not share state.

use crate::types::{Query, RenderMode, Scope};
use tracing::debug;

/// Bare scope marker; with a suffix it carries the path fragment inline
pub const SCOPE_MARKER: char = '.';
/// 31-day lookback
pub const RECENCY_MARKER: &str = "~";
/// One row per distinct path
pub const UNIQUE_MARKER: &str = "!";

/// Compile raw tokens into a structured query. Mode markers and other
/// single-character tokens never become terms.
pub fn compile(tokens: &[String]) -> Query {
    let mut query = Query::default();

    for token in tokens {
        if token.len() == 1 && token.starts_with(SCOPE_MARKER) {
            query.scope = Some(Scope::CurrentProject);
        } else if token.len() > 1 && token.starts_with(SCOPE_MARKER) {
            query.scope = Some(Scope::PathContains(token[1..].to_string()));
        } else if token == RECENCY_MARKER {
            query.recency_window = true;
        } else if token == UNIQUE_MARKER {
            query.unique_by_path = true;
        } else if token.chars().count() == 1 {
            // Elided: single characters are reserved for markers, even when
            // meant literally
        } else {
            query.terms.push(token.to_lowercase());
        }
    }

    debug!(?query, "compiled query");
    query
}

/// Scan the raw tokens for a render-mode marker. The table is walked in its
/// fixed order and the last entry with a matching token wins, so a stray `A`
/// beats an earlier `S` regardless of where either sits in the token list.
pub fn detect_mode(tokens: &[String]) -> RenderMode {
    let mut mode = RenderMode::default();
    for (marker, candidate) in RenderMode::MARKER_TABLE {
        if tokens.iter().any(|token| token == marker) {
            mode = candidate;
        }
    }
    mode
}

/// Raw tokens with mode markers removed, as note content for add mode
pub fn strip_markers(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !RenderMode::is_marker(token))
        .cloned()
        .collect()
}
