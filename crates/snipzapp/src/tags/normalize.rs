//! Write-boundary normalization for tags.
//!
//! Rules, applied in order:
//! - Trim surrounding whitespace
//! - Lowercase
//! - Drop entries left empty
//! - Drop later duplicates (first occurrence wins)
//! - Keep at most [`MAX_TAGS`] entries

use crate::model::MAX_TAGS;

/// Normalizes decoded tags before they are stored.
///
/// ```
/// use snipzapp::tags::normalize_tags;
///
/// let raw = vec![" Rust ".to_string(), "".to_string(), "rust".to_string(), "CLI".to_string()];
/// assert_eq!(normalize_tags(raw), vec!["rust".to_string(), "cli".to_string()]);
/// ```
pub fn normalize_tags(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len().min(MAX_TAGS));

    for tag in raw {
        if out.len() == MAX_TAGS {
            break;
        }
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || out.contains(&tag) {
            continue;
        }
        out.push(tag);
    }

    out
}
