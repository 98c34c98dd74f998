//! Query evaluation over a store snapshot
//!
//! Filters apply in a fixed order: recency window, scope, AND-combined
//! terms, then optional per-path collapse. Every stage preserves the input
//! sequence order; no sort is imposed here, and an empty result is a normal
//! outcome for the dispatcher to interpret.

use crate::types::{Note, Query, Scope};
use std::collections::HashSet;
use tracing::debug;

/// Lookback for the recency window
const RECENCY_DAYS: i64 = 31;

/// Ambient inputs the filter needs beyond the query itself
#[derive(Debug, Clone)]
pub struct FilterContext {
    /// Resolved label for current-project scope; None when the caller is
    /// outside the root (only an error if the query actually asks for it,
    /// which the CLI checks before getting here)
    pub current_project: Option<String>,
    /// "Now" in epoch milliseconds, explicit for testability
    pub now_millis: i64,
}

/// Apply a compiled query to a store snapshot
pub fn apply(notes: Vec<Note>, query: &Query, ctx: &FilterContext) -> Vec<Note> {
    let mut result = notes;

    if query.recency_window {
        let cutoff = ctx.now_millis / 1000 - RECENCY_DAYS * 86_400;
        result.retain(|note| note.time_seconds().map_or(false, |secs| secs > cutoff));
    }

    match &query.scope {
        Some(Scope::CurrentProject) => {
            let label = ctx.current_project.clone().unwrap_or_default();
            result.retain(|note| note.path.contains(&label));
        }
        Some(Scope::PathContains(fragment)) => {
            result.retain(|note| note.path.contains(fragment.as_str()));
        }
        None => {}
    }

    for term in &query.terms {
        result.retain(|note| {
            note.path.to_lowercase().contains(term) || note.text.to_lowercase().contains(term)
        });
    }

    if query.unique_by_path {
        result = last_per_path(result);
    }

    debug!(count = result.len(), "filtered");
    result
}

/// One row per distinct path, keeping the last occurrence of each and the
/// sequence order of the survivors
fn last_per_path(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    let mut survivors: Vec<Note> = notes
        .into_iter()
        .rev()
        .filter(|note| seen.insert(note.path.clone()))
        .collect();
    survivors.reverse();
    survivors
}
