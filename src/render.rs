//! Rendering matched notes into shell-executable lines
//!
//! Each render mode is one arm of a closed enum dispatch. The output is a
//! plain vector of lines, recomputed fresh on every call; the caller prints
//! them or pipes them into a shell. Comment mode is annotation only, every
//! other mode emits text a shell can execute directly.

use crate::config::Config;
use crate::query::strip_markers;
use crate::timefmt::human_time_at;
use crate::types::{Note, RenderMode};
use chrono::Utc;
use std::path::PathBuf;
use tracing::debug;

/// Above this many rows, timestamps pass through unformatted
const TIME_FORMAT_LIMIT: usize = 1500;

/// Extensions open mode hands to the editor instead of the system opener
const TEXT_EXTENSIONS: [&str; 10] = [
    "md", "txt", "kdl", "rs", "py", "toml", "json", "sh", "yaml", "yml",
];

/// Render a result set under the given mode
pub fn render(
    config: &Config,
    results: &[Note],
    mode: RenderMode,
    raw_tokens: &[String],
) -> Vec<String> {
    render_at(config, results, mode, raw_tokens, Utc::now().timestamp_millis())
}

/// Same as [`render`] with an explicit "now" for time labels
pub fn render_at(
    config: &Config,
    results: &[Note],
    mode: RenderMode,
    raw_tokens: &[String],
    now_millis: i64,
) -> Vec<String> {
    debug!(count = results.len(), ?mode, "rendering");

    // Add mode never looks at the result set
    if mode == RenderMode::Add {
        return render_add(config, raw_tokens);
    }

    // No match in cd mode means the project does not exist yet
    if results.is_empty() && mode == RenderMode::ChangeDir {
        return match raw_tokens.first() {
            Some(name) => vec![make_project_line(config, name)],
            None => Vec::new(),
        };
    }

    let format_times = results.len() < TIME_FORMAT_LIMIT;
    results
        .iter()
        .filter_map(|note| {
            let label = time_label(note, format_times, now_millis);
            render_note(config, note, mode, &label)
        })
        .collect()
}

fn render_note(config: &Config, note: &Note, mode: RenderMode, label: &str) -> Option<String> {
    let path = display_path(&note.path);
    match mode {
        RenderMode::Comment => Some(format!("{}|> {}: [{}]", path, note.text, label)),
        RenderMode::ChangeDir => Some(format!(
            "cd {}",
            quote(&project_dir(config, &note.path).display().to_string())
        )),
        RenderMode::Copy => Some(format!(
            "printf '%s' {} | {}",
            quote(&note.text),
            config.clipboard_cmd
        )),
        RenderMode::Open => render_open(config, note, label),
        RenderMode::Raw => Some(format!("{} [{}]", note.text, label)),
        // Handled before per-note dispatch
        RenderMode::Add => None,
    }
}

fn is_text_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Open mode: act on the first whitespace word of the note text. Notes that
/// point at nothing actionable are dropped.
fn render_open(config: &Config, note: &Note, label: &str) -> Option<String> {
    let word = note.text.split_whitespace().next()?;

    let line = if let Some(rest) = word.strip_prefix('~') {
        // Application shortcut: underscores stand in for spaces
        let expanded = rest.replace('_', " ");
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        format!("open {}", quote(&format!("{}{}", home.display(), expanded)))
    } else {
        let target = project_dir(config, &note.path).join(word);
        if target.is_dir() {
            format!("cd {}", quote(&target.display().to_string()))
        } else if target.exists() && is_text_file(&target) {
            format!("{} {}", config.editor, quote(&target.display().to_string()))
        } else if target.exists() {
            format!("open {}", quote(&target.display().to_string()))
        } else if word.starts_with("http") {
            format!("open {}", quote(word))
        } else {
            return None;
        }
    };

    Some(format!("{} # [{}]", line, label))
}

/// Add mode: the marker-stripped tokens are content, not a query. A single
/// scope-style token instead creates and enters a new project.
fn render_add(config: &Config, raw_tokens: &[String]) -> Vec<String> {
    let stripped = strip_markers(raw_tokens);

    if stripped.len() == 1 && stripped[0].len() > 1 && stripped[0].starts_with('.') {
        return vec![make_project_line(config, &stripped[0][1..])];
    }

    if stripped.is_empty() {
        return Vec::new();
    }

    vec![format!("dotlog add {}", quote(&stripped.join(" ")))]
}

/// Create-and-enter instruction for a new project directory
fn make_project_line(config: &Config, name: &str) -> String {
    let dir = quote(&config.root.join(name).display().to_string());
    format!("mkdir -p {dir} && cd {dir}")
}

/// The directory a note's path points at; the empty path is the root itself
fn project_dir(config: &Config, path: &str) -> PathBuf {
    if path.is_empty() {
        config.root.clone()
    } else {
        config.root.join(path)
    }
}

/// Sentinel label for the root location in non-executable output
fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "."
    } else {
        path
    }
}

fn time_label(note: &Note, format_times: bool, now_millis: i64) -> String {
    if !format_times {
        return note.time.clone();
    }
    match note.time_millis() {
        Some(millis) => human_time_at(millis, now_millis),
        None => note.time.clone(),
    }
}

/// Single-quote a string for the shell, escaping embedded quotes
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NOW: i64 = 1_700_000_000_000;

    fn fixture() -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let config = Config::at_root(dir.path());
        (dir, config)
    }

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    fn note(path: &str, text: &str) -> Note {
        // Two days before NOW
        Note::new(path, text, "1699827200000")
    }

    #[test]
    fn test_comment_mode_layout() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[note("proj1", "fix the build")],
            RenderMode::Comment,
            &[],
            NOW,
        );
        assert_eq!(lines, vec!["proj1|> fix the build: [2d ago]"]);
    }

    #[test]
    fn test_comment_mode_root_sentinel() {
        let (_dir, config) = fixture();
        let lines = render_at(&config, &[note("", "hello")], RenderMode::Comment, &[], NOW);
        assert!(lines[0].starts_with(".|> hello"));
    }

    #[test]
    fn test_change_dir_mode() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[note("proj1", "anything")],
            RenderMode::ChangeDir,
            &toks(&["proj1", "S"]),
            NOW,
        );
        let expected = format!("cd '{}'", config.root.join("proj1").display());
        assert_eq!(lines, vec![expected]);
    }

    #[test]
    fn test_change_dir_empty_results_creates_project() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[],
            RenderMode::ChangeDir,
            &toks(&["newproj", "S"]),
            NOW,
        );
        assert_eq!(lines.len(), 1);
        let dir = format!("'{}'", config.root.join("newproj").display());
        assert_eq!(lines[0], format!("mkdir -p {dir} && cd {dir}"));
    }

    #[test]
    fn test_copy_mode_quotes_text() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[note("proj1", "it's done")],
            RenderMode::Copy,
            &[],
            NOW,
        );
        assert!(lines[0].starts_with(r"printf '%s' 'it'\''s done' | "));
    }

    #[test]
    fn test_open_mode_url() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[note("proj1", "http://x some context")],
            RenderMode::Open,
            &[],
            NOW,
        );
        assert_eq!(lines, vec!["open 'http://x' # [2d ago]"]);
    }

    #[test]
    fn test_open_mode_directory() {
        let (_dir, config) = fixture();
        std::fs::create_dir_all(config.root.join("proj1").join("docs")).unwrap();
        let lines = render_at(&config, &[note("proj1", "docs")], RenderMode::Open, &[], NOW);
        let expected = format!(
            "cd '{}' # [2d ago]",
            config.root.join("proj1").join("docs").display()
        );
        assert_eq!(lines, vec![expected]);
    }

    #[test]
    fn test_open_mode_text_file_uses_editor() {
        let (_dir, config) = fixture();
        std::fs::create_dir_all(config.root.join("proj1")).unwrap();
        std::fs::write(config.root.join("proj1").join("notes.md"), "x").unwrap();
        let lines = render_at(
            &config,
            &[note("proj1", "notes.md review this")],
            RenderMode::Open,
            &[],
            NOW,
        );
        assert!(lines[0].starts_with(&config.editor));
    }

    #[test]
    fn test_open_mode_other_file_uses_opener() {
        let (_dir, config) = fixture();
        std::fs::create_dir_all(config.root.join("proj1")).unwrap();
        std::fs::write(config.root.join("proj1").join("shot.png"), "x").unwrap();
        let lines = render_at(
            &config,
            &[note("proj1", "shot.png")],
            RenderMode::Open,
            &[],
            NOW,
        );
        assert!(lines[0].starts_with("open '"));
    }

    #[test]
    fn test_open_mode_application_shortcut() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[note("proj1", "~/Applications/Some_App.app")],
            RenderMode::Open,
            &[],
            NOW,
        );
        assert!(lines[0].starts_with("open '"));
        assert!(lines[0].contains("Some App.app"));
    }

    #[test]
    fn test_open_mode_drops_non_actionable() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[note("proj1", "just a thought")],
            RenderMode::Open,
            &[],
            NOW,
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn test_raw_mode() {
        let (_dir, config) = fixture();
        let lines = render_at(&config, &[note("proj1", "plain")], RenderMode::Raw, &[], NOW);
        assert_eq!(lines, vec!["plain [2d ago]"]);
    }

    #[test]
    fn test_add_mode_builds_add_instruction() {
        let (_dir, config) = fixture();
        let lines = render_at(
            &config,
            &[],
            RenderMode::Add,
            &toks(&["A", "buy", "milk"]),
            NOW,
        );
        assert_eq!(lines, vec!["dotlog add 'buy milk'"]);
    }

    #[test]
    fn test_add_mode_scope_token_creates_project() {
        let (_dir, config) = fixture();
        let lines = render_at(&config, &[], RenderMode::Add, &toks(&["A", ".newp"]), NOW);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("mkdir -p "));
        assert!(lines[0].contains("newp"));
    }

    #[test]
    fn test_large_result_set_passes_raw_timestamps() {
        let (_dir, config) = fixture();
        let results: Vec<Note> = (0..1500)
            .map(|i| Note::new("proj1", "text", format!("{:013}", 1_699_000_000_000_i64 + i)))
            .collect();
        let lines = render_at(&config, &results, RenderMode::Raw, &[], NOW);
        assert!(lines[0].ends_with("[1699000000000]"));
    }
}
