//! # Storage Layer
//!
//! This module defines the storage abstraction for snipz. The [`SnippetStore`]
//! trait is the only persistence contract the rest of the crate depends on:
//! CRUD by integer id over a single entity type.
//!
//! ## Two Layers
//!
//! - [`backend::StorageBackend`]: the "how". Loads and saves the whole snippet
//!   table as one document (memory or a JSON file).
//! - [`table_store::TableStore`]: the "what". Implements [`SnippetStore`] on top
//!   of any backend: id assignment, timestamps, not-found semantics.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, `snippets.json` in the data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── snippets.json   # { "next_id": 4, "rows": { "1": {...}, "3": {...} } }
//! ```
//!
//! Ids come from `next_id`, which only ever grows, so an id is never handed out
//! twice even after its snippet is deleted.

use crate::error::Result;
use crate::model::{NewSnippet, Snippet, SnippetId, SnippetPatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod table_store;

/// The persisted table: every row plus the id counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetTable {
    pub next_id: SnippetId,
    pub rows: BTreeMap<SnippetId, Snippet>,
}

impl Default for SnippetTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Abstract interface for snippet persistence.
///
/// Missing ids surface as [`crate::error::SnipzError::SnippetNotFound`].
pub trait SnippetStore {
    /// All snippets, ascending by id
    fn find_all(&self) -> Result<Vec<Snippet>>;

    /// One snippet by id
    fn find_by_id(&self, id: SnippetId) -> Result<Snippet>;

    /// Store a new snippet; the store assigns its id
    fn create(&mut self, fields: NewSnippet) -> Result<Snippet>;

    /// Apply a partial update
    fn update(&mut self, id: SnippetId, patch: SnippetPatch) -> Result<Snippet>;

    /// Remove a snippet permanently
    fn delete(&mut self, id: SnippetId) -> Result<()>;

    /// Remove every snippet, returning how many were removed
    fn delete_all(&mut self) -> Result<usize>;
}
