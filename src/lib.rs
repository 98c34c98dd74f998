//! Dotlog - append-only personal note log
//!
//! Notes are (path, text, time) records in one columnar store file. A
//! compact token-query language filters them, and a render dispatcher turns
//! the matches into directly executable shell lines: change directory, open
//! a resource, copy to the clipboard, add a note, create a project.
//!
//! # Architecture
//!
//! - **Types**: core records ([`Note`], [`Query`], [`RenderMode`])
//! - **Store**: columnar JSON persistence (load / append / save)
//! - **Query**: token compilation and mode detection
//! - **Filter**: ordered, stable narrowing of a store snapshot
//! - **Render**: per-mode shell-line output
//!
//! # Example
//!
//! ```ignore
//! use dotlog_core::{config::Config, filter, query, render, store};
//!
//! let config = Config::resolve(None, None);
//! let tokens = vec!["http".to_string(), "O".to_string()];
//! let query = query::compile(&tokens);
//! let mode = query::detect_mode(&tokens);
//! let notes = store::load(&config)?;
//! // ... filter and render
//! # Ok::<(), dotlog_core::error::DotlogError>(())
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod legacy;
pub mod project;
pub mod query;
pub mod render;
pub mod store;
pub mod timefmt;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{DotlogError, Result};
pub use types::{Note, Query, RenderMode, Scope};
