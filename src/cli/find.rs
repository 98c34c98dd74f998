//! The find command: compile tokens, filter the store, render shell lines
//!
//! This is the whole query pipeline in one place. The same raw tokens feed
//! two independent passes: term compilation and mode detection.

use dotlog_core::config::Config;
use dotlog_core::error::Result;
use dotlog_core::filter::{self, FilterContext};
use dotlog_core::project::current_project;
use dotlog_core::query::{compile, detect_mode};
use dotlog_core::render::render;
use dotlog_core::types::{RenderMode, Scope};
use dotlog_core::{store, timefmt};
use tracing::debug;

/// Run a query and print one output line per rendered note
pub fn handle(config: &Config, tokens: &[String]) -> Result<()> {
    for line in run(config, tokens)? {
        println!("{}", line);
    }
    Ok(())
}

/// The query pipeline, returning lines instead of printing them
pub fn run(config: &Config, tokens: &[String]) -> Result<Vec<String>> {
    let query = compile(tokens);
    let mode = detect_mode(tokens);
    debug!(?mode, terms = query.terms.len(), "running query");

    // Add mode reinterprets the tokens as note content; no store read
    if mode == RenderMode::Add {
        return Ok(render(config, &[], mode, tokens));
    }

    // Project resolution only when the query actually scopes to it, so
    // queries from outside the root still work
    let current = match query.scope {
        Some(Scope::CurrentProject) => Some(current_project(config)?),
        _ => None,
    };

    let notes = store::load(config)?;
    let ctx = FilterContext {
        current_project: current,
        now_millis: timefmt::now_millis(),
    };

    let mut results = filter::apply(notes, &query, &ctx);
    // Most recent first for presentation
    results.sort_by(|a, b| b.time.cmp(&a.time));

    Ok(render(config, &results, mode, tokens))
}
