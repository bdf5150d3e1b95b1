use crate::commands::helpers::{check_code, check_title};
use crate::commands::ActionOutcome;
use crate::error::Result;
use crate::model::{NewSnippet, Snippet};
use crate::store::SnippetStore;
use crate::tags;

/// Validates and stores a new snippet.
///
/// `tags_raw` is the transport string (`["a","b"]`); it is decoded leniently,
/// then normalized. Nothing is written when validation fails.
pub fn run<S: SnippetStore>(
    store: &mut S,
    title: &str,
    code: &str,
    tags_raw: Option<&str>,
) -> Result<ActionOutcome<Snippet>> {
    if let Some(message) = check_title(title).or_else(|| check_code(code)) {
        tracing::debug!(%message, "rejected snippet creation");
        return Ok(ActionOutcome::Failure(message));
    }

    let tags = tags::normalize_tags(tags::decode(tags_raw));
    let fields = NewSnippet::new(title.trim(), code.trim(), &tags);
    let snippet = store.create(fields)?;

    tracing::info!(id = snippet.id, title = %snippet.title, "snippet created");
    Ok(ActionOutcome::Success(snippet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_TAGS;
    use crate::store::memory::InMemoryStore;

    fn count(store: &InMemoryStore) -> usize {
        store.find_all().unwrap().len()
    }

    #[test]
    fn creates_trimmed_snippet() {
        let mut store = InMemoryStore::new();
        let outcome = run(&mut store, "  Hello  ", "\n fn main() {} \n", None).unwrap();

        let snippet = outcome.success().unwrap();
        assert_eq!(snippet.id, 1);
        assert_eq!(snippet.title, "Hello");
        assert_eq!(snippet.code, "fn main() {}");
        assert_eq!(snippet.tags, "[]");
        assert_eq!(count(&store), 1);
    }

    #[test]
    fn empty_title_writes_nothing() {
        let mut store = InMemoryStore::new();
        let outcome = run(&mut store, "", "code", None).unwrap();
        assert_eq!(outcome.message(), Some("Title is required"));
        assert_eq!(count(&store), 0);
    }

    #[test]
    fn empty_code_writes_nothing() {
        let mut store = InMemoryStore::new();
        let outcome = run(&mut store, "Title", "   ", None).unwrap();
        assert_eq!(outcome.message(), Some("Code is required"));
        assert_eq!(count(&store), 0);
    }

    #[test]
    fn title_is_checked_before_code() {
        let mut store = InMemoryStore::new();
        let outcome = run(&mut store, " ", "", None).unwrap();
        assert_eq!(outcome.message(), Some("Title is required"));
    }

    #[test]
    fn too_long_inputs_are_rejected() {
        let mut store = InMemoryStore::new();
        let long_title = "t".repeat(101);
        let outcome = run(&mut store, &long_title, "code", None).unwrap();
        assert_eq!(
            outcome.message(),
            Some("Title must be 100 characters or less")
        );

        let long_code = "c".repeat(10_001);
        let outcome = run(&mut store, "Title", &long_code, None).unwrap();
        assert_eq!(
            outcome.message(),
            Some("Code must be 10000 characters or less")
        );
        assert_eq!(count(&store), 0);
    }

    #[test]
    fn normalizes_tags() {
        let mut store = InMemoryStore::new();
        let raw = r#"[" Rust ", "CLI", "", "rust", 7]"#;
        let snippet = run(&mut store, "T", "c", Some(raw))
            .unwrap()
            .success()
            .unwrap();
        assert_eq!(snippet.tags(), vec!["rust".to_string(), "cli".to_string()]);
    }

    #[test]
    fn caps_tags_at_ten() {
        let mut store = InMemoryStore::new();
        let tags: Vec<String> = (1..=11).map(|i| format!("tag{i}")).collect();
        let raw = tags::encode(&tags);

        let snippet = run(&mut store, "T", "c", Some(&raw))
            .unwrap()
            .success()
            .unwrap();

        let stored = store.find_by_id(snippet.id).unwrap().tags();
        assert_eq!(stored.len(), MAX_TAGS);
        assert_eq!(stored, tags[..MAX_TAGS].to_vec());
    }

    #[test]
    fn malformed_tags_store_as_empty() {
        let mut store = InMemoryStore::new();
        let snippet = run(&mut store, "T", "c", Some("not json"))
            .unwrap()
            .success()
            .unwrap();
        assert!(snippet.tags().is_empty());
    }

    #[test]
    fn store_fault_propagates() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        assert!(run(&mut store, "T", "c", None).is_err());
    }
}
