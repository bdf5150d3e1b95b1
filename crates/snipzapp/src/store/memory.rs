use super::mem_backend::MemBackend;
use super::table_store::TableStore;

pub type InMemoryStore = TableStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        TableStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewSnippet;
    use crate::store::SnippetStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = NewSnippet::new(
                    format!("Test Snippet {}", i + 1),
                    format!("println!(\"snippet {}\");", i + 1),
                    &[],
                );
                self.store.create(fields).unwrap();
            }
            self
        }

        pub fn with_snippet(mut self, title: &str, code: &str, tags: &[&str]) -> Self {
            let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            self.store
                .create(NewSnippet::new(title, code, &tags))
                .unwrap();
            self
        }

        /// Stores a row with a raw, unvalidated tag payload.
        pub fn with_raw_tags(mut self, title: &str, raw_tags: &str) -> Self {
            self.store
                .create(NewSnippet {
                    title: title.to_string(),
                    code: "code".to_string(),
                    tags: raw_tags.to_string(),
                })
                .unwrap();
            self
        }
    }
}
