//! Per-snippet delete status.
//!
//! Each snippet in a list view is in one of three states:
//!
//! ```text
//!            confirm            action fails / faults
//!   Idle ─────────────▶ Deleting ─────────────────────▶ Failed(msg)
//!     ▲                    │                               │
//!     │                    │ action succeeds               │ confirm
//!     │                    ▼                               ▼
//!     │            (stays Deleting until              Deleting
//!     └──────────── the view is refreshed)
//! ```
//!
//! `Deleting` is entered before the action runs, so a slow store never leaves
//! the view showing an actionable item that is already being removed. On
//! success nothing is reverted: the caller is expected to refresh the view with
//! fresh data, which resets every status.

use crate::commands::ActionOutcome;
use crate::error::Result;
use crate::model::SnippetId;

pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this snippet? This action cannot be undone.";
pub const DELETE_FAILED_NOTICE: &str = "Failed to delete snippet. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteStatus {
    #[default]
    Idle,
    Deleting,
    Failed(String),
}

impl DeleteStatus {
    pub fn is_deleting(&self) -> bool {
        matches!(self, Self::Deleting)
    }
}

/// What the user sees and answers. Implemented by the UI layer.
pub trait Interaction {
    /// Blocking yes/no question.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Blocking notice.
    fn notify(&mut self, message: &str);
}

/// The delete mutation as the view sees it.
///
/// `Ok(Failure(_))` is a reported failure, `Err(_)` an unexpected fault.
pub trait DeleteAction {
    fn delete(&mut self, id: SnippetId) -> Result<ActionOutcome>;
}

impl<F> DeleteAction for F
where
    F: FnMut(SnippetId) -> Result<ActionOutcome>,
{
    fn delete(&mut self, id: SnippetId) -> Result<ActionOutcome> {
        self(id)
    }
}

/// First phase of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginDelete {
    /// Marked `Deleting`; the action should run now.
    Proceed,
    /// The user said no. Nothing changed.
    Declined,
    /// A delete for this id is already in flight. Nothing changed.
    AlreadyDeleting,
}

/// How a full delete request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    Declined,
    AlreadyDeleting,
    /// The action succeeded; the view should be refreshed.
    Deleted,
    /// The action failed; the message was surfaced to the user.
    Failed(String),
}

impl DeleteRequest {
    pub fn needs_refresh(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}
