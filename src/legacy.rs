//! One-time migration from the legacy per-directory text logs
//!
//! Each project directory under the root may carry a flat `dots.kdl` file
//! whose lines are a 13-character millisecond-epoch prefix, one delimiter
//! character, then the note text. Migration folds every legacy line plus the
//! current store into one set, deduplicated by timestamp, and rewrites the
//! store file.

use crate::config::{Config, LEGACY_FILE};
use crate::error::Result;
use crate::types::{Note, TIME_WIDTH};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Legacy line layout: 13 time digits, 1 delimiter char, then text
const TEXT_OFFSET: usize = TIME_WIDTH + 1;

/// Every legacy log file directly under a child of the root
pub fn collect_legacy_files(config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(&config.root)? {
        let candidate = entry?.path().join(LEGACY_FILE);
        if candidate.exists() {
            files.push(candidate);
        }
    }
    files.sort();
    debug!(count = files.len(), "collected legacy log files");
    Ok(files)
}

/// Parse one legacy log file into notes; the project path is the name of the
/// directory holding the file
pub fn read_legacy_file(config: &Config, file: &PathBuf) -> Result<Vec<Note>> {
    let path = file
        .parent()
        .and_then(|dir| dir.strip_prefix(&config.root).ok())
        .map(|rel| rel.to_string_lossy().to_string())
        .unwrap_or_default();

    let content = std::fs::read_to_string(file)?;
    let mut notes = Vec::new();
    for line in content.trim().lines() {
        match (line.get(..TIME_WIDTH), line.get(TEXT_OFFSET..)) {
            (Some(time), Some(text)) => notes.push(Note::new(&path, text, time)),
            _ => warn!(file = %file.display(), line, "skipping malformed legacy line"),
        }
    }
    Ok(notes)
}

/// Merge all legacy logs with the current store (if any), deduplicate by
/// timestamp keeping the first occurrence, sort descending, and save
pub fn migrate(config: &Config) -> Result<usize> {
    let mut merged = Vec::new();
    for file in collect_legacy_files(config)? {
        merged.extend(read_legacy_file(config, &file)?);
    }

    // A missing store just means this is the first migration
    match crate::store::load(config) {
        Ok(existing) => merged.extend(existing),
        Err(crate::error::DotlogError::StoreUnavailable { .. }) => {
            info!("no existing store; creating one from legacy logs");
        }
        Err(e) => return Err(e),
    }

    let mut seen = HashSet::new();
    merged.retain(|note| seen.insert(note.time.clone()));
    merged.sort_by(|a, b| b.time.cmp(&a.time));

    crate::store::save(config, &merged)?;
    info!(count = merged.len(), "migration complete");
    Ok(merged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let config = Config::at_root(dir.path());
        (dir, config)
    }

    fn write_legacy(config: &Config, project: &str, lines: &[&str]) {
        let dir = config.root.join(project);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(LEGACY_FILE), lines.join("\n")).unwrap();
    }

    #[test]
    fn test_collect_finds_only_dirs_with_logs() {
        let (_dir, config) = fixture();
        write_legacy(&config, "proj1", &["1700000000000 hello"]);
        std::fs::create_dir_all(config.root.join("empty")).unwrap();

        let files = collect_legacy_files(&config).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("proj1/dots.kdl"));
    }

    #[test]
    fn test_line_layout() {
        let (_dir, config) = fixture();
        write_legacy(&config, "proj1", &["1700000000000 note body"]);

        let files = collect_legacy_files(&config).unwrap();
        let notes = read_legacy_file(&config, &files[0]).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].path, "proj1");
        assert_eq!(notes[0].time, "1700000000000");
        assert_eq!(notes[0].text, "note body");
    }

    #[test]
    fn test_migrate_dedups_by_time() {
        let (_dir, config) = fixture();
        write_legacy(&config, "proj1", &["1700000000000 from legacy"]);
        crate::store::save(
            &config,
            &[Note::new("proj1", "already migrated", "1700000000000")],
        )
        .unwrap();

        let count = migrate(&config).unwrap();
        assert_eq!(count, 1);
        // Legacy order precedes the store in the merge, so its row survives
        let notes = crate::store::load(&config).unwrap();
        assert_eq!(notes[0].text, "from legacy");
    }

    #[test]
    fn test_migrate_without_existing_store() {
        let (_dir, config) = fixture();
        write_legacy(
            &config,
            "proj1",
            &["1700000000000 one", "1700000001000 two"],
        );

        let count = migrate(&config).unwrap();
        assert_eq!(count, 2);
    }
}
