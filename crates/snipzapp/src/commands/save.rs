use crate::commands::helpers::{check_code, SNIPPET_NOT_FOUND};
use crate::commands::ActionOutcome;
use crate::error::{Result, SnipzError};
use crate::model::{Snippet, SnippetId, SnippetPatch};
use crate::store::SnippetStore;

/// Replaces the code of an existing snippet. Title and tags are untouched.
pub fn run<S: SnippetStore>(
    store: &mut S,
    id: SnippetId,
    code: &str,
) -> Result<ActionOutcome<Snippet>> {
    if let Some(message) = check_code(code) {
        tracing::debug!(id, %message, "rejected snippet save");
        return Ok(ActionOutcome::Failure(message));
    }

    match store.update(id, SnippetPatch::code(code.trim())) {
        Ok(snippet) => {
            tracing::info!(id, "snippet saved");
            Ok(ActionOutcome::Success(snippet))
        }
        Err(SnipzError::SnippetNotFound(_)) => {
            tracing::debug!(id, "save target not found");
            Ok(ActionOutcome::failure(SNIPPET_NOT_FOUND))
        }
        Err(err) => Err(err),
    }
}
