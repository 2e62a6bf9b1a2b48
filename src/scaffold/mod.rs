mod paths;
mod workflow;

pub use paths::{FilePaths, SOLUTIONS_DIR, TESTS_DIR, file_stem, normalize_title, resolve_paths};
pub use workflow::{OverwritePrompter, PromptError, ScaffoldOutcome, scaffold_question};
