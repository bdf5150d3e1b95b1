//! Tag support for snipz.
//!
//! Tags are short labels used to filter the snippet list. They travel and are
//! stored as a single string holding a JSON array of strings:
//!
//! ```text
//! ["rust","cli"]
//! ```
//!
//! ## Codec
//!
//! [`encode`] and [`decode`] convert between a tag list and that transport
//! string. Decoding is total: absent, empty, unparsable or non-array input all
//! decode to an empty list, and non-string array elements are skipped. Stored
//! rows may predate stricter writers, so reads never fail on tag data.
//!
//! The codec does not normalize. Trimming, lowercasing, de-duplication and the
//! per-snippet cap happen once, at the write boundary, in [`normalize`].

pub mod normalize;

use serde_json::Value;

pub use normalize::normalize_tags;

/// Serializes a tag list to its transport string.
///
/// ```
/// use snipzapp::tags::encode;
///
/// assert_eq!(encode(&["rust".to_string(), "cli".to_string()]), r#"["rust","cli"]"#);
/// assert_eq!(encode(&[]), "[]");
/// ```
pub fn encode(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

/// Parses a transport string back into a tag list.
///
/// ```
/// use snipzapp::tags::decode;
///
/// assert_eq!(decode(Some(r#"["go"]"#)), vec!["go".to_string()]);
/// assert!(decode(None).is_empty());
/// assert!(decode(Some("")).is_empty());
/// assert!(decode(Some("{broken")).is_empty());
/// assert!(decode(Some(r#"{"a":1}"#)).is_empty());
/// ```
pub fn decode(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Ok(_) => Vec::new(),
        Err(err) => {
            tracing::debug!(%err, "ignoring malformed tag payload");
            Vec::new()
        }
    }
}
