//! Snippet filtering.
//!
//! The list view combines two predicates with AND:
//! - **Text**: empty matches everything, otherwise a case-insensitive
//!   substring of the title or of the code.
//! - **Tag**: unset matches everything, otherwise an exact member of the
//!   snippet's decoded tags.
//!
//! Matching is plain substring containment. There is no tokenizing, ranking
//! or fuzzy matching.

use crate::model::Snippet;

/// The filter state of a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetFilter {
    pub search_text: String,
    pub tag: Option<String>,
}

impl SnippetFilter {
    pub fn new(search_text: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            search_text: search_text.into(),
            tag: tag.filter(|t| !t.is_empty()),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty() || self.tag.is_some()
    }

    pub fn matches(&self, snippet: &Snippet) -> bool {
        matches_text(snippet, &self.search_text) && matches_tag(snippet, self.tag.as_deref())
    }
}

pub fn matches_text(snippet: &Snippet, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    snippet.title.to_lowercase().contains(&needle) || snippet.code.to_lowercase().contains(&needle)
}

pub fn matches_tag(snippet: &Snippet, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(tag) => snippet.has_tag(tag),
    }
}

/// De-duplicated union of every snippet's decoded tags, in first-seen order.
pub fn collect_tags<'a>(snippets: impl IntoIterator<Item = &'a Snippet>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for snippet in snippets {
        for tag in snippet.tags() {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}
