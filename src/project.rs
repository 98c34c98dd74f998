//! Project resolution
//!
//! The project label for a working directory is the name of the direct child
//! of the configured root that contains it. Resolution walks the ancestor
//! chain upward, bounded by the directory's own depth, and fails explicitly
//! when the root is never reached.

use crate::config::Config;
use crate::error::{DotlogError, Result};
use std::path::Path;
use tracing::debug;

/// Resolve the project label for `dir`, the direct child of the root that is
/// an ancestor of (or equal to) it
pub fn resolve_project(config: &Config, dir: &Path) -> Result<String> {
    let mut current = dir;

    for _ in 0..=dir.components().count() {
        if let Some(parent) = current.parent() {
            if parent == config.root {
                let label = current
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .ok_or_else(|| DotlogError::OutOfScope(dir.to_path_buf()))?;
                debug!(project = %label, "resolved project");
                return Ok(label);
            }
            current = parent;
        } else {
            break;
        }
    }

    Err(DotlogError::OutOfScope(dir.to_path_buf()))
}

/// Resolve the project label for the process working directory
pub fn current_project(config: &Config) -> Result<String> {
    let cwd = std::env::current_dir()?;
    resolve_project(config, &cwd)
}
