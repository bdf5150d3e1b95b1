use crate::api::SnipzApi;
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A file-backed store in a throwaway directory.
pub struct TestEnv {
    // Held so the directory outlives the test
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A fresh store handle over the same directory, like a second process would open.
    pub fn store(&self) -> FileStore {
        FileStore::new(self.root.clone())
    }

    pub fn api(&self) -> SnipzApi<FileStore> {
        SnipzApi::new(self.store())
    }

    pub fn table_path(&self) -> PathBuf {
        self.root.join("snippets.json")
    }
}
