//! Configuration for dotlog
//!
//! Everything the components need from the environment lives in one explicit
//! struct passed down from main, rather than module-level globals. Resolution
//! order for each path is CLI flag, then environment variable, then a home
//! directory default.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the note root directory
pub const ROOT_ENV: &str = "DOTLOG_ROOT";
/// Environment variable overriding the store file location
pub const STORE_ENV: &str = "DOTLOG_STORE";

/// File name of each legacy per-directory note log
pub const LEGACY_FILE: &str = "dots.kdl";

/// Process-wide configuration, resolved once in main
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory bounding all project resolution and path rendering
    pub root: PathBuf,
    /// Columnar store file
    pub store_path: PathBuf,
    /// Command the copy mode pipes note text into
    pub clipboard_cmd: String,
    /// Editor the open mode uses for plain-text files
    pub editor: String,
}

impl Config {
    /// Resolve configuration from optional CLI overrides
    pub fn resolve(root_flag: Option<String>, store_flag: Option<String>) -> Self {
        let root = root_flag
            .or_else(|| std::env::var(ROOT_ENV).ok())
            .map(PathBuf::from)
            .unwrap_or_else(default_root);

        let store_path = store_flag
            .or_else(|| std::env::var(STORE_ENV).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("db.json"));

        let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

        debug!(root = %root.display(), store = %store_path.display(), "resolved config");

        Self {
            root,
            store_path,
            clipboard_cmd: default_clipboard_cmd(),
            editor,
        }
    }

    /// Configuration rooted at an explicit directory, store file inside it.
    /// Used by tests and by callers that already know where everything is.
    pub fn at_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            store_path: root.join("db.json"),
            clipboard_cmd: default_clipboard_cmd(),
            editor: "vi".to_string(),
        }
    }
}

fn default_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("me")
}

fn default_clipboard_cmd() -> String {
    if cfg!(target_os = "macos") {
        "pbcopy".to_string()
    } else {
        "xclip -selection clipboard".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_default() {
        let config = Config::resolve(Some("/tmp/notes".into()), None);
        assert_eq!(config.root, PathBuf::from("/tmp/notes"));
        assert_eq!(config.store_path, PathBuf::from("/tmp/notes/db.json"));
    }

    #[test]
    fn test_store_flag_independent_of_root() {
        let config = Config::resolve(Some("/tmp/notes".into()), Some("/tmp/elsewhere/db.json".into()));
        assert_eq!(config.store_path, PathBuf::from("/tmp/elsewhere/db.json"));
    }

    #[test]
    fn test_at_root() {
        let config = Config::at_root(Path::new("/data/me"));
        assert_eq!(config.store_path, PathBuf::from("/data/me/db.json"));
    }
}
