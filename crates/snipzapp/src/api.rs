//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every snipz operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Contains faults**: mutation actions never return `Err`. A store fault is
//!   logged and replaced by a generic failure message
//! - **Returns structured types**: snippets, outcomes, views
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr or prompts
//! - **Presentation concerns**: it returns data, not strings to print
//!
//! Reads (`list_snippets`, `get_snippet`, `list_view`) still return `Result`.
//! A failed load is not a user mistake and callers surface it as an error.
//!
//! ## Generic Over SnippetStore
//!
//! `SnipzApi<S: SnippetStore>` is generic over the storage backend:
//! - Production: `SnipzApi<FileStore>`
//! - Testing: `SnipzApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check that each method reaches the right command and that faults
//! come back as the right generic message. Command logic is tested in the
//! command modules.

use crate::commands::{self, seed::SeedReport, ActionOutcome};
use crate::error::Result;
use crate::model::{Snippet, SnippetId};
use crate::store::SnippetStore;
use crate::view::{DeleteAction, SnippetListView};

pub const CREATE_FAILED: &str = "Failed to create snippet";
pub const SAVE_FAILED: &str = "Failed to save snippet";
pub const DELETE_FAILED: &str = "Failed to delete snippet";

/// The main API facade for snipz operations.
pub struct SnipzApi<S: SnippetStore> {
    store: S,
}

impl<S: SnippetStore> SnipzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and stores a new snippet. `tags` is the JSON-array transport form.
    pub fn create_snippet(
        &mut self,
        title: &str,
        code: &str,
        tags: Option<&str>,
    ) -> ActionOutcome<Snippet> {
        contain(
            commands::create::run(&mut self.store, title, code, tags),
            CREATE_FAILED,
        )
    }

    /// Replaces a snippet's code. Title and tags are left alone.
    pub fn save_snippet(&mut self, id: SnippetId, code: &str) -> ActionOutcome<Snippet> {
        contain(commands::save::run(&mut self.store, id, code), SAVE_FAILED)
    }

    pub fn delete_snippet(&mut self, id: SnippetId) -> ActionOutcome {
        contain(commands::delete::run(&mut self.store, id), DELETE_FAILED)
    }

    /// All snippets, oldest first.
    pub fn list_snippets(&self) -> Result<Vec<Snippet>> {
        commands::get::list(&self.store)
    }

    pub fn get_snippet(&self, id: SnippetId) -> Result<Snippet> {
        commands::get::show(&self.store, id)
    }

    /// A fresh list view over the current collection.
    pub fn list_view(&self) -> Result<SnippetListView> {
        Ok(SnippetListView::new(self.list_snippets()?))
    }

    /// Reloads `view` in place, keeping its filters.
    pub fn refresh_view(&self, view: &mut SnippetListView) -> Result<()> {
        view.replace_snippets(self.list_snippets()?);
        Ok(())
    }

    /// Wipes the store and inserts the sample snippets.
    pub fn seed(&mut self) -> Result<SeedReport> {
        commands::seed::run(&mut self.store)
    }
}

/// The list view contains faults itself, so they reach it unconverted.
impl<S: SnippetStore> DeleteAction for SnipzApi<S> {
    fn delete(&mut self, id: SnippetId) -> Result<ActionOutcome> {
        commands::delete::run(&mut self.store, id)
    }
}

fn contain<T>(result: Result<ActionOutcome<T>>, generic: &str) -> ActionOutcome<T> {
    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(%err, "{}", generic);
            ActionOutcome::failure(generic)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::{SNIPPET_NOT_FOUND, TITLE_REQUIRED};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::view::{DeleteRequest, Interaction, DELETE_FAILED_NOTICE};

    struct AlwaysYes {
        notices: Vec<String>,
    }

    impl Interaction for AlwaysYes {
        fn confirm(&mut self, _prompt: &str) -> bool {
            true
        }

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    fn api() -> SnipzApi<InMemoryStore> {
        SnipzApi::new(InMemoryStore::new())
    }

    #[test]
    fn create_dispatches_and_validates() {
        let mut api = api();
        let outcome = api.create_snippet("Hello", "print(1)", Some(r#"["Py"]"#));
        let snippet = outcome.success().unwrap();
        assert_eq!(snippet.tags(), vec!["py".to_string()]);

        let outcome = api.create_snippet("   ", "x", None);
        assert_eq!(outcome.message(), Some(TITLE_REQUIRED));
        assert_eq!(api.list_snippets().unwrap().len(), 1);
    }

    #[test]
    fn create_fault_becomes_generic_failure() {
        let mut api = api();
        api.store().backend().set_simulate_write_error(true);
        let outcome = api.create_snippet("T", "C", None);
        assert_eq!(outcome, ActionOutcome::failure(CREATE_FAILED));
    }

    #[test]
    fn save_fault_becomes_generic_failure() {
        let mut api = SnipzApi::new(StoreFixture::new().with_snippets(1).store);
        api.store().backend().set_simulate_write_error(true);
        assert_eq!(
            api.save_snippet(1, "new"),
            ActionOutcome::failure(SAVE_FAILED)
        );
    }

    #[test]
    fn delete_fault_becomes_generic_failure() {
        let mut api = SnipzApi::new(StoreFixture::new().with_snippets(1).store);
        api.store().backend().set_simulate_read_error(true);
        assert_eq!(api.delete_snippet(1), ActionOutcome::failure(DELETE_FAILED));
    }

    #[test]
    fn missing_ids_are_reported_not_faulted() {
        let mut api = api();
        assert_eq!(api.save_snippet(9, "x").message(), Some(SNIPPET_NOT_FOUND));
        assert_eq!(api.delete_snippet(9).message(), Some(SNIPPET_NOT_FOUND));
        assert!(api.get_snippet(9).is_err());
    }

    #[test]
    fn view_deletes_through_the_api() {
        let mut api = SnipzApi::new(
            StoreFixture::new()
                .with_snippet("A", "package main", &["go"])
                .with_snippet("B", "fn main() {}", &["rust", "go"])
                .store,
        );
        let mut view = api.list_view().unwrap();
        view.set_tag_filter(Some("rust".into()));
        assert_eq!(view.visible_snippets().len(), 1);

        let mut user = AlwaysYes { notices: vec![] };
        let outcome = view.request_delete(2, &mut user, &mut api);
        assert_eq!(outcome, DeleteRequest::Deleted);
        assert!(view.is_deleting(2));

        api.refresh_view(&mut view).unwrap();
        assert!(view.deleting_ids().is_empty());
        assert_eq!(view.tag_filter(), Some("rust"));
        assert!(view.visible_snippets().is_empty());
        assert_eq!(view.snippets().len(), 1);
    }

    #[test]
    fn view_surfaces_api_failures() {
        let mut api = SnipzApi::new(StoreFixture::new().with_snippets(1).store);
        let mut view = api.list_view().unwrap();
        let mut user = AlwaysYes { notices: vec![] };

        let outcome = view.request_delete(7, &mut user, &mut api);
        assert_eq!(outcome, DeleteRequest::Failed(SNIPPET_NOT_FOUND.into()));

        api.store().backend().set_simulate_write_error(true);
        let outcome = view.request_delete(1, &mut user, &mut api);
        assert_eq!(outcome, DeleteRequest::Failed(DELETE_FAILED_NOTICE.into()));
        assert_eq!(
            user.notices,
            vec![SNIPPET_NOT_FOUND.to_string(), DELETE_FAILED_NOTICE.to_string()]
        );
        assert!(!view.is_deleting(1));
        assert_eq!(api.list_snippets().unwrap().len(), 1);
    }

    #[test]
    fn seed_replaces_contents() {
        let mut api = SnipzApi::new(StoreFixture::new().with_snippets(2).store);
        let report = api.seed().unwrap();
        assert_eq!(report.removed, 2);
        assert_eq!(api.list_snippets().unwrap().len(), report.created.len());
    }
}
