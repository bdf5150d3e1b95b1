use crate::commands::helpers::SNIPPET_NOT_FOUND;
use crate::commands::ActionOutcome;
use crate::error::{Result, SnipzError};
use crate::model::SnippetId;
use crate::store::SnippetStore;

/// Permanently removes a snippet. There is no soft delete.
pub fn run<S: SnippetStore>(store: &mut S, id: SnippetId) -> Result<ActionOutcome> {
    match store.delete(id) {
        Ok(()) => {
            tracing::info!(id, "snippet deleted");
            Ok(ActionOutcome::Success(()))
        }
        Err(SnipzError::SnippetNotFound(_)) => {
            tracing::debug!(id, "delete target not found");
            Ok(ActionOutcome::failure(SNIPPET_NOT_FOUND))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_snippet() {
        let mut store = StoreFixture::new().with_snippets(2).store;
        assert_eq!(run(&mut store, 1).unwrap(), ActionOutcome::Success(()));

        let remaining: Vec<_> = store.find_all().unwrap().iter().map(|s| s.id).collect();
        assert_eq!(remaining, vec![2]);
    }

    #[test]
    fn missing_id_is_reported() {
        let mut store = StoreFixture::new().with_snippets(1).store;
        let outcome = run(&mut store, 5).unwrap();
        assert_eq!(outcome.message(), Some("Snippet not found"));
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn deleting_twice_reports_not_found() {
        let mut store = StoreFixture::new().with_snippets(1).store;
        assert!(run(&mut store, 1).unwrap().is_success());
        assert_eq!(run(&mut store, 1).unwrap().message(), Some("Snippet not found"));
    }

    #[test]
    fn store_fault_propagates() {
        let mut store = StoreFixture::new().with_snippets(1).store;
        store.backend().set_simulate_write_error(true);
        assert!(run(&mut store, 1).is_err());
    }
}
