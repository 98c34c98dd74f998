//! CLI command handlers
//!
//! One module per subcommand; each exposes a `handle` function taking the
//! resolved configuration.

pub mod add;
pub mod alias;
pub mod find;
pub mod migrate;
