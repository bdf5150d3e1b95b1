//! # Command Layer
//!
//! This module contains the **core business logic** of snipz: the mutation
//! actions (`create`, `save`, `delete`), the reads behind the list and detail
//! views, and the seed routine.
//!
//! ## Outcomes, Not Errors
//!
//! Mutation actions return [`ActionOutcome`]: either `Success(value)` or
//! `Failure(message)` carrying a user-facing message. Validation problems and
//! missing ids are ordinary outcomes. Only store faults travel as `Err`, and
//! the API facade converts those into generic failure messages, so callers
//! above the facade never see a raw fault.
//!
//! The action never decides navigation. A caller that gets `Success` refreshes
//! or moves on; one that gets `Failure` shows the message and stays put.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr or terminal concerns
//! - **User interaction**: no prompts or confirmations (the view layer owns those)
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and check both the returned outcome and the store contents.

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod save;
pub mod seed;

/// Result of a mutation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<T = ()> {
    Success(T),
    Failure(String),
}

impl<T> ActionOutcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message),
        }
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accessors() {
        let ok: ActionOutcome<u32> = ActionOutcome::Success(3);
        assert!(ok.is_success());
        assert_eq!(ok.message(), None);
        assert_eq!(ok.success(), Some(3));

        let failed: ActionOutcome<u32> = ActionOutcome::failure("nope");
        assert!(!failed.is_success());
        assert_eq!(failed.message(), Some("nope"));
        assert_eq!(failed.success(), None);
    }
}
