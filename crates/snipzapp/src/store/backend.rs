use super::SnippetTable;
use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while TableStore handles the "what" (ids, timestamps, not-found).
pub trait StorageBackend {
    /// Load the whole table. A store that was never written loads as empty.
    fn load_table(&self) -> Result<SnippetTable>;

    /// Replace the whole table.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_table(&self, table: &SnippetTable) -> Result<()>;

    /// Where the table lives. For FsBackend, a real path. For MemBackend, a virtual one.
    fn location(&self) -> PathBuf;
}
