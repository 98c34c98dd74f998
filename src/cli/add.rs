//! The add command: append one note under the current project

use dotlog_core::config::Config;
use dotlog_core::error::Result;
use dotlog_core::project::current_project;
use dotlog_core::store;
use dotlog_core::timefmt::timestamp_now;
use dotlog_core::types::Note;
use tracing::info;

/// Append the joined tokens as a note stamped with the current time
pub fn handle(config: &Config, tokens: &[String]) -> Result<()> {
    let text = tokens.join(" ");
    let project = current_project(config)?;
    let note = Note::new(project, text, timestamp_now());

    store::append(config, note)?;
    info!("note added");
    println!("Added");
    Ok(())
}
