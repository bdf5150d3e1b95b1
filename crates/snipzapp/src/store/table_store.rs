use super::backend::StorageBackend;
use super::SnippetStore;
use crate::error::{Result, SnipzError};
use crate::model::{NewSnippet, Snippet, SnippetId, SnippetPatch};
use chrono::Utc;
use std::path::PathBuf;

pub struct TableStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> TableStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }
}

impl<B: StorageBackend> SnippetStore for TableStore<B> {
    fn find_all(&self) -> Result<Vec<Snippet>> {
        let table = self.backend.load_table()?;
        // BTreeMap iteration is already ascending by id
        Ok(table.rows.into_values().collect())
    }

    fn find_by_id(&self, id: SnippetId) -> Result<Snippet> {
        let mut table = self.backend.load_table()?;
        table.rows.remove(&id).ok_or(SnipzError::SnippetNotFound(id))
    }

    fn create(&mut self, fields: NewSnippet) -> Result<Snippet> {
        let mut table = self.backend.load_table()?;
        let id = table.next_id.max(1);
        let now = Utc::now();

        let snippet = Snippet {
            id,
            title: fields.title,
            code: fields.code,
            tags: fields.tags,
            created_at: now,
            updated_at: now,
        };

        table.rows.insert(id, snippet.clone());
        table.next_id = id + 1;
        self.backend.save_table(&table)?;

        tracing::debug!(id, "created snippet row");
        Ok(snippet)
    }

    fn update(&mut self, id: SnippetId, patch: SnippetPatch) -> Result<Snippet> {
        let mut table = self.backend.load_table()?;
        let row = table
            .rows
            .get_mut(&id)
            .ok_or(SnipzError::SnippetNotFound(id))?;

        if let Some(code) = patch.code {
            row.code = code;
        }
        row.updated_at = Utc::now();
        let updated = row.clone();

        self.backend.save_table(&table)?;
        tracing::debug!(id, "updated snippet row");
        Ok(updated)
    }

    fn delete(&mut self, id: SnippetId) -> Result<()> {
        let mut table = self.backend.load_table()?;
        if table.rows.remove(&id).is_none() {
            return Err(SnipzError::SnippetNotFound(id));
        }
        self.backend.save_table(&table)?;
        tracing::debug!(id, "deleted snippet row");
        Ok(())
    }

    fn delete_all(&mut self) -> Result<usize> {
        let mut table = self.backend.load_table()?;
        let removed = table.rows.len();
        table.rows.clear();
        self.backend.save_table(&table)?;
        Ok(removed)
    }
}
