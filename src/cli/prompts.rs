use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Text};

use leetgen::scaffold::{OverwritePrompter, PromptError};

/// Asks the user for the problem URL. Blank input is rejected by the
/// validator, so the returned string is always non-empty.
pub fn prompt_url() -> Result<String, PromptError> {
    Text::new("Please provide the LeetCode URL (e.g., 'https://leetcode.com/problems/two-sum/'):")
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("Problem URL cannot be empty.".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()
        .map_err(prompt_error)
}

/// Asks whether an existing repository should be wiped before use.
pub fn confirm_fresh_start() -> Result<bool, PromptError> {
    Confirm::new("Do you want to remove all existing solutions and start fresh?")
        .with_default(false)
        .prompt()
        .map_err(prompt_error)
}

/// Terminal-backed overwrite confirmation.
pub struct InquirePrompter;

impl OverwritePrompter for InquirePrompter {
    fn confirm_overwrite(&self, label: &str) -> Result<bool, PromptError> {
        Confirm::new(&format!(
            "A file for problem '{}' is already present in the repository, overwrite it?",
            label
        ))
        .with_default(false)
        .prompt()
        .map_err(prompt_error)
    }
}

fn prompt_error(error: InquireError) -> PromptError {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled
        }
        other => PromptError::Failure(other.to_string()),
    }
}
