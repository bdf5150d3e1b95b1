//! # Snipz
//!
//! Snipz keeps a personal library of code snippets: a title, the code, and a
//! handful of tags. This crate is the UI-agnostic core. The `snipz` binary is
//! one client of it.
//!
//! ## Architecture
//!
//! ```text
//!   CLI (snipz)  ──▶  api::SnipzApi  ──▶  commands::*  ──▶  store::SnippetStore
//!        │                  │
//!        └──── view::SnippetListView (filters, delete status)
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`ActionOutcome`, `Result`)
//! - **Never** writes to stdout/stderr
//! - **Never** prompts; the list view asks through the [`view::Interaction`] trait
//!
//! ## Tags on the Wire
//!
//! Tags travel and persist as a JSON array inside a single string field
//! (`["rust","cli"]`). [`tags::encode`] and [`tags::decode`] are the only
//! places that know this. Decoding never fails: anything unreadable is treated
//! as "no tags".
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests against `InMemoryStore`.
//! 2. **API** (`api.rs`): dispatch and fault containment.
//! 3. **View** (`view/`): filtering and the delete state machine, with a
//!    scripted [`view::Interaction`].
//! 4. **Integration** (`tests/`): the file-backed store on a temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Validation and mutation logic
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Snippet` and its input types
//! - [`tags`]: Tag codec and normalization
//! - [`view`]: List filtering and per-item delete status
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod tags;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
