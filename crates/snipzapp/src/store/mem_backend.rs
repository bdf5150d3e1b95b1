use super::backend::StorageBackend;
use super::SnippetTable;
use crate::error::{Result, SnipzError};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since snipz is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    table: RefCell<SnippetTable>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Enable read error simulation (an unreachable store).
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_table(&self) -> Result<SnippetTable> {
        if *self.simulate_read_error.borrow() {
            return Err(SnipzError::Store("Simulated read error".to_string()));
        }
        Ok(self.table.borrow().clone())
    }

    fn save_table(&self, table: &SnippetTable) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SnipzError::Store("Simulated write error".to_string()));
        }
        *self.table.borrow_mut() = table.clone();
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://snippets")
    }
}
