use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use leetgen::counter::{self, SolutionCounts};
use leetgen::question::{QuestionError, QuestionFetcher};
use leetgen::scaffold::{ScaffoldOutcome, resolve_paths, scaffold_question};

mod prompts;

use prompts::InquirePrompter;

#[derive(Clone, Copy)]
pub struct Config {
    pub verbose: bool,
    pub dry_run: bool,
}

/// Difficulty directories managed by `init`, relative to the repository
/// root.
const SOLUTION_DIRS: [&str; 6] = [
    "src/easy",
    "src/medium",
    "src/hard",
    "tests/easy",
    "tests/medium",
    "tests/hard",
];

/// Prompts for a problem URL, fetches the question and scaffolds the
/// solution/test file pair in the current directory.
pub async fn new_problem(config: &Config) -> Result<()> {
    let url = prompts::prompt_url()?;

    if config.verbose {
        println!("Fetching question data for '{}'", url.trim());
    }

    let question = match QuestionFetcher::create(&url).await {
        Ok(question) => question,
        Err(QuestionError::PremiumContent(premium)) => {
            // Expected stop, not a failure: report it and exit cleanly.
            println!("⊚ {}", premium);
            println!("No files were created.");
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    if config.verbose {
        println!(
            "✓ Fetched '{} | {}' ({})",
            question.question_id, question.title, question.difficulty
        );
    }

    let root = Path::new(".");

    if config.dry_run {
        let paths = resolve_paths(&question, root);
        println!("Dry run: would write {}", paths.solution.display());
        println!("Dry run: would write {}", paths.test.display());
        return Ok(());
    }

    match scaffold_question(&question, root, &InquirePrompter)? {
        ScaffoldOutcome::Created => println!("✓ Files created successfully!"),
        ScaffoldOutcome::Overwritten => println!("✓ The files were overwritten successfully!"),
        ScaffoldOutcome::Cancelled => println!("Operation cancelled!"),
    }

    Ok(())
}

/// Initializes the solutions repository, optionally wiping existing
/// solutions, and refreshes the README counters either way.
pub async fn init_repository(config: &Config) -> Result<()> {
    println!("Initializing the LeetCode solutions repository...\n");

    let fresh_start = prompts::confirm_fresh_start()?;

    if config.dry_run {
        if fresh_start {
            println!("Dry run: would remove all existing solutions and reset counters");
        } else {
            println!("Dry run: would refresh the README counters");
        }
        return Ok(());
    }

    let root = Path::new(".");

    if fresh_start {
        remove_all_solutions(root)?;
        println!("✓ All existing solutions have been removed. You can now start fresh!");
    } else {
        println!("Keeping the existing solutions.");
    }

    refresh_counters(root)
}

/// Recounts the solutions and updates the README counters.
pub async fn update_counters(config: &Config) -> Result<()> {
    let root = Path::new(".");

    if config.dry_run {
        let counts = SolutionCounts::scan(root)?;
        println!(
            "Dry run: counters would be set to {} easy, {} medium, {} hard",
            counts.easy, counts.medium, counts.hard
        );
        return Ok(());
    }

    refresh_counters(root)
}

fn refresh_counters(root: &Path) -> Result<()> {
    let counts = SolutionCounts::scan(root)?;
    counter::update_readme(root, counts).context("Failed to update README counters")?;

    println!(
        "✓ README counters updated ({} easy, {} medium, {} hard)",
        counts.easy, counts.medium, counts.hard
    );

    Ok(())
}

fn remove_all_solutions(root: &Path) -> Result<()> {
    for dir in SOLUTION_DIRS {
        let path = root.join(dir);
        if path.exists() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    Ok(())
}
