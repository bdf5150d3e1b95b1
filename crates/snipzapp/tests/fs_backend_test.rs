use snipzapp::api::SnipzApi;
use snipzapp::error::SnipzError;
use snipzapp::model::{NewSnippet, SnippetPatch};
use snipzapp::store::backend::StorageBackend;
use snipzapp::store::fs::FileStore;
use snipzapp::store::fs_backend::FsBackend;
use snipzapp::store::{SnippetStore, SnippetTable};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

#[test]
fn test_fresh_directory_is_an_empty_store() {
    let (_dir, store) = setup();
    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn test_rows_survive_reopening() {
    let (dir, mut store) = setup();
    let tags = vec!["rust".to_string(), "cli".to_string()];
    let created = store
        .create(NewSnippet::new("Hello", "fn main() {}", &tags))
        .unwrap();

    let reopened = FileStore::new(dir.path().to_path_buf());
    let loaded = reopened.find_by_id(created.id).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.tags(), tags);
}

#[test]
fn test_tags_are_stored_as_json_text() {
    let (dir, mut store) = setup();
    store
        .create(NewSnippet::new("T", "C", &["a".to_string(), "b".to_string()]))
        .unwrap();

    let on_disk = fs::read_to_string(dir.path().join("snippets.json")).unwrap();
    assert!(on_disk.contains(r#""tags": "[\"a\",\"b\"]""#), "{on_disk}");
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, mut store) = setup();
    store.create(NewSnippet::new("A", "a", &[])).unwrap();
    store.update(1, SnippetPatch::code("b")).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let (dir, mut store) = setup();
    store.create(NewSnippet::new("A", "a", &[])).unwrap();
    let second = store.create(NewSnippet::new("B", "b", &[])).unwrap();
    store.delete(second.id).unwrap();

    let mut reopened = FileStore::new(dir.path().to_path_buf());
    let third = reopened.create(NewSnippet::new("C", "c", &[])).unwrap();
    assert_eq!(third.id, second.id + 1);
}

#[test]
fn test_blank_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("snippets.json"), "  \n").unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    assert!(backend.load_table().unwrap().rows.is_empty());
}

#[test]
fn test_corrupt_table_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("snippets.json"), "{ not json").unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    assert!(matches!(
        store.find_all(),
        Err(SnipzError::Serialization(_))
    ));
}

#[test]
fn test_malformed_tag_text_on_disk_decodes_to_nothing() {
    let dir = TempDir::new().unwrap();
    let raw = r#"{
  "next_id": 2,
  "rows": {
    "1": {
      "id": 1,
      "title": "Old",
      "code": "x",
      "tags": "not-json",
      "created_at": "2024-01-01T00:00:00Z",
      "updated_at": "2024-01-01T00:00:00Z"
    }
  }
}"#;
    fs::write(dir.path().join("snippets.json"), raw).unwrap();

    let api = SnipzApi::new(FileStore::new(dir.path().to_path_buf()));
    let mut view = api.list_view().unwrap();
    assert_eq!(view.snippets().len(), 1);
    assert!(view.all_tags().is_empty());

    view.set_tag_filter(Some("not-json".into()));
    assert!(view.visible_snippets().is_empty());
}

#[test]
fn test_full_lifecycle_through_the_api() {
    let dir = TempDir::new().unwrap();
    let mut api = SnipzApi::new(FileStore::new(dir.path().to_path_buf()));

    let created = api
        .create_snippet("  Greeting ", "echo hi", Some(r#"["Shell"," bash ","shell"]"#))
        .success()
        .unwrap();
    assert_eq!(created.title, "Greeting");
    assert_eq!(created.tags(), vec!["shell".to_string(), "bash".to_string()]);

    let saved = api.save_snippet(created.id, "echo hello").success().unwrap();
    assert_eq!(saved.code, "echo hello");
    assert_eq!(saved.title, "Greeting");

    assert!(api.delete_snippet(created.id).is_success());
    assert!(api.list_snippets().unwrap().is_empty());
}

#[test]
fn test_failed_rename_removes_tmp_file() {
    let (dir, mut store) = setup();
    // A directory in the table's place makes the final rename fail
    fs::create_dir(dir.path().join("snippets.json")).unwrap();
    fs::write(dir.path().join("snippets.json").join("blocker"), "x").unwrap();

    let backend = FsBackend::new(dir.path().to_path_buf());
    assert!(backend.save_table(&SnippetTable::default()).is_err());
    assert!(store.create(NewSnippet::new("A", "a", &[])).is_err());

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "Found leftover tmp files: {:?}", leftovers);
}
