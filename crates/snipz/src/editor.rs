//! External editor integration for `create` and `edit`.

use snipzapp::error::{Result, SnipzError};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

#[cfg(windows)]
const FALLBACK_EDITORS: &[&str] = &["notepad"];
#[cfg(not(windows))]
const FALLBACK_EDITORS: &[&str] = &["vim", "vi", "nano"];

/// `$EDITOR`, then `$VISUAL`, then the platform fallbacks in order.
pub fn editor_candidates() -> Vec<String> {
    let configured = ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|var| env::var(var).ok())
        .find(|editor| !editor.trim().is_empty());
    candidates_from(configured)
}

fn candidates_from(configured: Option<String>) -> Vec<String> {
    match configured {
        Some(editor) => vec![editor],
        None => FALLBACK_EDITORS.iter().map(|e| e.to_string()).collect(),
    }
}

/// Opens `initial` in the user's editor and returns what was saved.
pub fn edit_text(initial: &str) -> Result<String> {
    let path = env::temp_dir().join(format!("snipz-edit-{}.txt", std::process::id()));
    fs::write(&path, initial)?;

    let result = run_first_available(&editor_candidates(), &path)
        .and_then(|()| fs::read_to_string(&path).map_err(SnipzError::Io));

    let _ = fs::remove_file(&path);
    result
}

/// Runs the first candidate that can be spawned. A missing program moves on
/// to the next one.
fn run_first_available(candidates: &[String], path: &Path) -> Result<()> {
    for editor in candidates {
        // Editors like "code --wait" carry their own arguments
        let mut parts = editor.split_whitespace();
        let Some(program) = parts.next() else {
            continue;
        };

        match Command::new(program).args(parts).arg(path).status() {
            Ok(status) if status.success() => return Ok(()),
            Ok(_) => {
                return Err(SnipzError::Api(format!(
                    "Editor '{}' exited with non-zero status",
                    editor
                )))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(%editor, "editor not found, trying next");
            }
            Err(e) => {
                return Err(SnipzError::Api(format!(
                    "Failed to launch editor '{}': {}",
                    editor, e
                )))
            }
        }
    }

    Err(SnipzError::Api(
        "No editor found. Set $EDITOR or pass --code".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_editor_is_the_only_candidate() {
        assert_eq!(
            candidates_from(Some("code --wait".into())),
            vec!["code --wait".to_string()]
        );
    }

    #[test]
    fn test_fallbacks_follow_the_platform() {
        let fallbacks = candidates_from(None);
        if cfg!(windows) {
            assert_eq!(fallbacks, vec!["notepad".to_string()]);
        } else {
            assert_eq!(fallbacks, vec!["vim", "vi", "nano"]);
        }
    }

    #[test]
    fn test_missing_programs_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buffer.txt");
        let err = run_first_available(
            &[
                "snipz-no-such-editor-a".to_string(),
                "snipz-no-such-editor-b".to_string(),
            ],
            &path,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "No editor found. Set $EDITOR or pass --code");
    }
}
