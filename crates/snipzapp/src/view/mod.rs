//! # List View
//!
//! [`SnippetListView`] is the state behind the snippet list page: the full
//! collection loaded once from the store, the current search text and tag
//! filter, and the delete status of each snippet.
//!
//! ## Derived Values
//!
//! [`SnippetListView::all_tags`] and [`SnippetListView::visible_snippets`] are
//! recomputed from state on every call. Expected collections hold at most a
//! few hundred snippets, so nothing is cached and nothing can go stale.
//!
//! Changing the filter never touches the store.
//!
//! ## Deleting
//!
//! [`SnippetListView::request_delete`] runs the whole workflow: confirm, mark
//! `Deleting`, call the action, then settle. Callers that drive the action
//! themselves (for example across an await point) use the two halves,
//! [`SnippetListView::begin_delete`] and [`SnippetListView::settle_delete`],
//! and can render the `Deleting` state in between. See [`delete_status`] for
//! the transitions.
//!
//! The view never returns an error. Failures reach the user through
//! [`Interaction::notify`] and the item goes back to being actionable.

pub mod delete_status;
pub mod filter;

use std::collections::{BTreeSet, HashMap};

use crate::commands::ActionOutcome;
use crate::error::Result;
use crate::model::{Snippet, SnippetId};

pub use delete_status::{
    BeginDelete, DeleteAction, DeleteRequest, DeleteStatus, Interaction, DELETE_CONFIRMATION,
    DELETE_FAILED_NOTICE,
};
pub use filter::SnippetFilter;

#[derive(Debug, Clone, Default)]
pub struct SnippetListView {
    all_snippets: Vec<Snippet>,
    filter: SnippetFilter,
    statuses: HashMap<SnippetId, DeleteStatus>,
}

impl SnippetListView {
    pub fn new(snippets: Vec<Snippet>) -> Self {
        Self {
            all_snippets: snippets,
            ..Self::default()
        }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.all_snippets
    }

    pub fn filter(&self) -> &SnippetFilter {
        &self.filter
    }

    pub fn search_text(&self) -> &str {
        &self.filter.search_text
    }

    pub fn tag_filter(&self) -> Option<&str> {
        self.filter.tag.as_deref()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
    }

    /// `None` or an empty tag clears the tag filter.
    pub fn set_tag_filter(&mut self, tag: Option<String>) {
        self.filter.tag = tag.filter(|t| !t.is_empty());
    }

    pub fn all_tags(&self) -> Vec<String> {
        filter::collect_tags(&self.all_snippets)
    }

    pub fn visible_snippets(&self) -> Vec<&Snippet> {
        self.all_snippets
            .iter()
            .filter(|s| self.filter.matches(s))
            .collect()
    }

    pub fn status(&self, id: SnippetId) -> DeleteStatus {
        self.statuses.get(&id).cloned().unwrap_or_default()
    }

    /// Controls for a deleting snippet should be disabled.
    pub fn is_deleting(&self, id: SnippetId) -> bool {
        self.statuses.get(&id).is_some_and(DeleteStatus::is_deleting)
    }

    pub fn deleting_ids(&self) -> BTreeSet<SnippetId> {
        self.statuses
            .iter()
            .filter(|(_, status)| status.is_deleting())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Swaps in a freshly loaded collection. Filters survive; statuses reset.
    pub fn replace_snippets(&mut self, snippets: Vec<Snippet>) {
        self.all_snippets = snippets;
        self.statuses.clear();
    }

    /// Confirms with the user and, if accepted, marks `id` as `Deleting`.
    pub fn begin_delete<I: Interaction + ?Sized>(
        &mut self,
        id: SnippetId,
        interaction: &mut I,
    ) -> BeginDelete {
        if self.is_deleting(id) {
            tracing::debug!(id, "delete already in flight");
            return BeginDelete::AlreadyDeleting;
        }
        if !interaction.confirm(DELETE_CONFIRMATION) {
            return BeginDelete::Declined;
        }
        self.statuses.insert(id, DeleteStatus::Deleting);
        BeginDelete::Proceed
    }

    /// Applies the action's result to a snippet marked by [`Self::begin_delete`].
    pub fn settle_delete<I: Interaction + ?Sized>(
        &mut self,
        id: SnippetId,
        result: Result<ActionOutcome>,
        interaction: &mut I,
    ) -> DeleteRequest {
        let message = match result {
            Ok(ActionOutcome::Success(())) => return DeleteRequest::Deleted,
            Ok(ActionOutcome::Failure(message)) => message,
            Err(err) => {
                tracing::error!(id, %err, "delete action faulted");
                DELETE_FAILED_NOTICE.to_string()
            }
        };

        self.statuses
            .insert(id, DeleteStatus::Failed(message.clone()));
        interaction.notify(&message);
        DeleteRequest::Failed(message)
    }

    /// Confirm, mark, delete, settle.
    pub fn request_delete<I, A>(
        &mut self,
        id: SnippetId,
        interaction: &mut I,
        action: &mut A,
    ) -> DeleteRequest
    where
        I: Interaction + ?Sized,
        A: DeleteAction + ?Sized,
    {
        match self.begin_delete(id, interaction) {
            BeginDelete::Declined => DeleteRequest::Declined,
            BeginDelete::AlreadyDeleting => DeleteRequest::AlreadyDeleting,
            BeginDelete::Proceed => {
                let result = action.delete(id);
                self.settle_delete(id, result, interaction)
            }
        }
    }
}
