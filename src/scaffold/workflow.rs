//! File emission with an existence check and overwrite confirmation.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::question::{Question, question_comment, tests_comment};
use crate::scaffold::paths::{FilePaths, resolve_paths};

/// Errors that can occur while collecting interactive input
#[derive(Debug)]
pub enum PromptError {
    Cancelled,
    Failure(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Cancelled => write!(f, "Input collection was cancelled"),
            PromptError::Failure(details) => {
                write!(f, "Failed to collect user input: {}", details)
            }
        }
    }
}

impl std::error::Error for PromptError {}

/// Collaborator asked for a yes/no decision when the target solution file
/// already exists.
pub trait OverwritePrompter {
    /// Asks whether the files for `label` should be overwritten.
    fn confirm_overwrite(&self, label: &str) -> Result<bool, PromptError>;
}

/// How a scaffold run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created,
    Overwritten,
    Cancelled,
}

/// Writes the solution and test files for a question under `root`.
///
/// When the solution file already exists the prompter is consulted first;
/// a declined confirmation cancels the run without touching any file. The
/// prompter is never consulted for a fresh question.
pub fn scaffold_question(
    question: &Question,
    root: &Path,
    prompter: &dyn OverwritePrompter,
) -> Result<ScaffoldOutcome> {
    let paths = resolve_paths(question, root);
    let existing = paths.solution.exists();

    if existing {
        let label = format!("{} | {}", question.question_id, question.title);
        if !prompter.confirm_overwrite(&label)? {
            return Ok(ScaffoldOutcome::Cancelled);
        }
    }

    write_files(question, &paths)?;

    Ok(if existing {
        ScaffoldOutcome::Overwritten
    } else {
        ScaffoldOutcome::Created
    })
}

/// Writes the solution/test pair, creating parent directories as needed.
/// The pair is not transactional: a failure on the second write surfaces
/// without rolling back the first.
fn write_files(question: &Question, paths: &FilePaths) -> Result<()> {
    for path in [&paths.solution, &paths.test] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(&paths.solution, format!("{}\n", question_comment(question))).with_context(|| {
        format!(
            "Failed to write solution file: {}",
            paths.solution.display()
        )
    })?;

    fs::write(&paths.test, format!("{}\n", tests_comment(question)))
        .with_context(|| format!("Failed to write test file: {}", paths.test.display()))?;

    Ok(())
}
