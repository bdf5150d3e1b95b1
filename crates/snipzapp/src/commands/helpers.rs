//! Input checks shared by the mutation actions.
//!
//! Each check returns `Some(message)` when the input is rejected. Inputs are
//! trimmed before length is measured, and length is counted in `char`s.

use crate::model::{MAX_CODE_CHARS, MAX_TITLE_CHARS};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const CODE_REQUIRED: &str = "Code is required";
pub const SNIPPET_NOT_FOUND: &str = "Snippet not found";

pub fn check_title(title: &str) -> Option<String> {
    check_text(title, TITLE_REQUIRED, "Title", MAX_TITLE_CHARS)
}

pub fn check_code(code: &str) -> Option<String> {
    check_text(code, CODE_REQUIRED, "Code", MAX_CODE_CHARS)
}

fn check_text(value: &str, required: &str, label: &str, max: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(required.to_string());
    }
    if trimmed.chars().count() > max {
        return Some(format!("{} must be {} characters or less", label, max));
    }
    None
}
