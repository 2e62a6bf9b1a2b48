//! Solution counters for the repository README.
//!
//! Counts the files under the per-difficulty solution directories and
//! rewrites the `- Easy: N` / `- Medium: N` / `- Hard: N` lines of
//! README.md to match.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::question::Difficulty;
use crate::scaffold::SOLUTIONS_DIR;

const README_FILE: &str = "README.md";

/// Number of solutions per difficulty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl SolutionCounts {
    /// Counts the solution files under `root`. A missing difficulty
    /// directory counts as zero.
    pub fn scan(root: &Path) -> Result<Self> {
        Ok(Self {
            easy: count_solutions(root, Difficulty::Easy)?,
            medium: count_solutions(root, Difficulty::Medium)?,
            hard: count_solutions(root, Difficulty::Hard)?,
        })
    }
}

fn count_solutions(root: &Path, difficulty: Difficulty) -> Result<usize> {
    let dir = root.join(SOLUTIONS_DIR).join(difficulty.dir_name());
    if !dir.is_dir() {
        return Ok(0);
    }

    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    Ok(entries.count())
}

/// Rewrites the counter lines of `README.md` under `root`.
pub fn update_readme(root: &Path, counts: SolutionCounts) -> Result<()> {
    let readme_path = root.join(README_FILE);
    let markdown = fs::read_to_string(&readme_path)
        .with_context(|| format!("Failed to read {}", readme_path.display()))?;

    let markdown = replace_counter(&markdown, "Easy", counts.easy);
    let markdown = replace_counter(&markdown, "Medium", counts.medium);
    let markdown = replace_counter(&markdown, "Hard", counts.hard);

    fs::write(&readme_path, markdown)
        .with_context(|| format!("Failed to write {}", readme_path.display()))?;

    Ok(())
}

/// Replaces the number on the first `- <label>: N` line.
fn replace_counter(markdown: &str, label: &str, count: usize) -> String {
    let pattern = Regex::new(&format!(r"(?m)^(- {}:\s*)\d+", label)).unwrap();
    pattern
        .replace(markdown, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], count)
        })
        .into_owned()
}
