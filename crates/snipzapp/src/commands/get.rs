use crate::error::Result;
use crate::model::{Snippet, SnippetId};
use crate::store::SnippetStore;

/// Every stored snippet, ascending by id.
pub fn list<S: SnippetStore>(store: &S) -> Result<Vec<Snippet>> {
    let snippets = store.find_all()?;
    tracing::debug!(count = snippets.len(), "listed snippets");
    Ok(snippets)
}

/// One snippet; a missing id is [`crate::error::SnipzError::SnippetNotFound`].
pub fn show<S: SnippetStore>(store: &S, id: SnippetId) -> Result<Snippet> {
    store.find_by_id(id)
}
