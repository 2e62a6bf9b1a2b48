use regex::Regex;
use std::path::{Path, PathBuf};

use crate::question::Question;

/// Root directory for solution files, grouped by difficulty.
pub const SOLUTIONS_DIR: &str = "src";

/// Root directory for test files, grouped by difficulty.
pub const TESTS_DIR: &str = "tests";

const SOURCE_EXT: &str = "rs";

/// Target paths for one scaffolded problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePaths {
    pub solution: PathBuf,
    pub test: PathBuf,
}

/// Normalizes a problem title into a file-name fragment.
///
/// The first `.` and any following whitespace become one underscore, every
/// remaining whitespace run becomes an underscore, and the result is
/// lower-cased.
pub fn normalize_title(title: &str) -> String {
    let leading_dot = Regex::new(r"\.\s*").unwrap();
    let whitespace = Regex::new(r"\s+").unwrap();

    let title = leading_dot.replace(title, "_");
    let title = whitespace.replace_all(&title, "_");
    title.to_lowercase()
}

/// File-name stem shared by the solution and test files.
pub fn file_stem(question: &Question) -> String {
    format!(
        "{}_{}",
        question.question_id,
        normalize_title(&question.title)
    )
}

/// Derives the solution and test paths for a question under `root`.
///
/// Deterministic: the same question always resolves to the same paths.
pub fn resolve_paths(question: &Question, root: &Path) -> FilePaths {
    let stem = file_stem(question);
    let difficulty_dir = question.difficulty.dir_name();

    FilePaths {
        solution: root
            .join(SOLUTIONS_DIR)
            .join(difficulty_dir)
            .join(format!("{}.{}", stem, SOURCE_EXT)),
        test: root
            .join(TESTS_DIR)
            .join(difficulty_dir)
            .join(format!("{}_test.{}", stem, SOURCE_EXT)),
    }
}
