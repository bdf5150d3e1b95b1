use super::fs_backend::FsBackend;
use super::table_store::TableStore;
use std::path::PathBuf;

/// Production store: a JSON table inside the data directory.
pub type FileStore = TableStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        TableStore::with_backend(FsBackend::new(root))
    }
}
