use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier assigned to a question by LeetCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Directory name used for grouping solutions of this tier.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

/// A fully assembled LeetCode question.
///
/// Built once per scaffold run and never mutated afterwards. The
/// `description`, `examples` and `constraints` fields hold the plain-text
/// rendering of the problem page; `question_url` is the canonical URL
/// reconstructed from the user input.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub title: String,
    pub question_id: String,
    pub title_slug: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub examples: Vec<String>,
    pub constraints: Vec<String>,
    pub question_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_difficulty_dir_name() {
        assert_eq!(Difficulty::Medium.dir_name(), "medium");
    }

    #[test]
    fn test_difficulty_deserializes_from_api_values() {
        let difficulty: Difficulty = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(difficulty, Difficulty::Medium);
    }
}
