//! # CLI Behavior
//!
//! This is **one possible UI client** for snipz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Commands
//!
//! Running `snipz` with no arguments defaults to `snipz list`.
//!
//! - `list [--search T] [--tag G]`: the list page. Filtering happens in the
//!   view; the store is read once.
//! - `show <id>`: one snippet, full code.
//! - `create <title>`: code from `--code`, piped stdin, or `$EDITOR`.
//! - `edit <id>`: same sources as create; only the code changes.
//! - `delete <id>`: asks for confirmation unless `--yes`.
//! - `copy <id>`: puts the code on the system clipboard.
//! - `tags`: every tag in use with its snippet count.
//! - `seed`: replaces everything with the sample snippets.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `logging`: tracing subscriber setup
//! - `render`: output formatting
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
