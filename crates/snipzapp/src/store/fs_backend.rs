use super::backend::StorageBackend;
use super::SnippetTable;
use crate::error::{Result, SnipzError};
use std::fs;
use std::path::PathBuf;

const TABLE_FILENAME: &str = "snippets.json";

/// File-backed storage: one pretty-printed JSON document per data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn table_path(&self) -> PathBuf {
        self.root.join(TABLE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SnipzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_table(&self) -> Result<SnippetTable> {
        let path = self.table_path();
        if !path.exists() {
            return Ok(SnippetTable::default());
        }
        let content = fs::read_to_string(&path).map_err(SnipzError::Io)?;
        if content.trim().is_empty() {
            return Ok(SnippetTable::default());
        }
        let table: SnippetTable =
            serde_json::from_str(&content).map_err(SnipzError::Serialization)?;
        tracing::debug!(path = %path.display(), rows = table.rows.len(), "loaded snippet table");
        Ok(table)
    }

    fn save_table(&self, table: &SnippetTable) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(table).map_err(SnipzError::Serialization)?;

        // Atomic write
        let tmp_path = self
            .root
            .join(format!(".snippets-{}.tmp", std::process::id()));
        fs::write(&tmp_path, content).map_err(SnipzError::Io)?;
        if let Err(err) = fs::rename(&tmp_path, self.table_path()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SnipzError::Io(err));
        }

        tracing::debug!(rows = table.rows.len(), "saved snippet table");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.table_path()
    }
}
