//! # Domain Model
//!
//! A [`Snippet`] is the single entity snipz persists: a title, a code body and a
//! tag list, identified by a positive integer assigned by the store.
//!
//! ## Tags On The Wire
//!
//! Tags are persisted as one string column holding a JSON array
//! (`["rust","cli"]`). The field is never parsed on load; [`Snippet::tags`]
//! decodes it on demand through the tag codec, which is total and yields an
//! empty list for anything it cannot read. Rows written by older
//! tools (or by hand) therefore never break a listing.
//!
//! ## Field Lifecycle
//!
//! - `id`: assigned at creation, immutable, never reused.
//! - `title`, `tags`: written once by `create`.
//! - `code`: the only field `save` rewrites.
//!
//! ## Limits
//!
//! Limits are counted in `char`s after trimming, see [`MAX_TITLE_CHARS`],
//! [`MAX_CODE_CHARS`] and [`MAX_TAGS`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tags;

/// Store-assigned identifier. Ids start at 1.
pub type SnippetId = u64;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_CODE_CHARS: usize = 10_000;
pub const MAX_TAGS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub code: String,
    /// Serialized tag list, see [`crate::tags::encode`].
    #[serde(default)]
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Decoded tags. Malformed payloads decode to an empty list.
    pub fn tags(&self) -> Vec<String> {
        tags::decode(Some(&self.tags))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

/// Fields for a snippet that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub code: String,
    pub tags: String,
}

impl NewSnippet {
    pub fn new(title: impl Into<String>, code: impl Into<String>, tags: &[String]) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            tags: tags::encode(tags),
        }
    }
}

/// Partial update applied by [`crate::store::SnippetStore::update`].
///
/// Only `code` is editable after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetPatch {
    pub code: Option<String>,
}

impl SnippetPatch {
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet_with_tags(raw: &str) -> Snippet {
        let now = Utc::now();
        Snippet {
            id: 1,
            title: "A".into(),
            code: "x".into(),
            tags: raw.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn decodes_tags_lazily() {
        let s = snippet_with_tags(r#"["rust","cli"]"#);
        assert_eq!(s.tags(), vec!["rust".to_string(), "cli".to_string()]);
        assert!(s.has_tag("cli"));
        assert!(!s.has_tag("CLI"));
    }

    #[test]
    fn malformed_tags_read_as_empty() {
        let s = snippet_with_tags("not json");
        assert!(s.tags().is_empty());
    }

    #[test]
    fn missing_tags_field_deserializes() {
        let json = r#"{"id":3,"title":"t","code":"c","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}"#;
        let s: Snippet = serde_json::from_str(json).unwrap();
        assert_eq!(s.tags, "");
        assert!(s.tags().is_empty());
    }

    #[test]
    fn new_snippet_encodes_tags() {
        let new = NewSnippet::new("t", "c", &["go".to_string()]);
        assert_eq!(new.tags, r#"["go"]"#);
    }
}
