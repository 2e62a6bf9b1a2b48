use crate::question::Question;

/// Total width of a generated comment line, including the ` * ` margin.
pub const COMMENT_WIDTH: usize = 80;

/// Content width available after reserving the comment margin.
const WRAP_WIDTH: usize = COMMENT_WIDTH - 3;

/// Renders the comment block written at the top of a solution file.
pub fn question_comment(question: &Question) -> String {
    let mut lines = vec![
        "/*".to_string(),
        format!(" * {} | {}", question.question_id, question.title),
        format!(" * Difficulty: {}", question.difficulty),
        " * ----------------".to_string(),
        " *".to_string(),
        " * Description:".to_string(),
    ];

    for line in wrap_text(&question.description) {
        if line.is_empty() {
            lines.push(" *".to_string());
        } else {
            lines.push(format!(" * {}", line));
        }
    }

    lines.push(" *".to_string());
    lines.push(format!(" * URL: {}", question.question_url));
    lines.push("*/".to_string());
    lines.join("\n")
}

/// Renders the comment block written at the top of a test file.
pub fn tests_comment(question: &Question) -> String {
    [
        "/*".to_string(),
        " * TESTS FILE".to_string(),
        format!(" * {} | {}", question.question_id, question.title),
        format!(" * Difficulty: {}", question.difficulty),
        " * ----------------".to_string(),
        " *".to_string(),
        "*/".to_string(),
    ]
    .join("\n")
}

/// Greedily wraps text to the comment content width.
///
/// Paragraphs are delimited by blank lines and separated by one empty line
/// in the output; single newlines inside a paragraph (bullet and pre
/// markers) are kept as line breaks. A word longer than the content width
/// occupies a line of its own.
fn wrap_text(text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split("\n\n") {
        for source_line in paragraph.trim().split('\n') {
            let mut line = String::new();
            for word in source_line.split_whitespace() {
                if line.is_empty() {
                    line.push_str(word);
                } else if line.len() + word.len() + 1 <= WRAP_WIDTH {
                    line.push(' ');
                    line.push_str(word);
                } else {
                    lines.push(std::mem::take(&mut line));
                    line.push_str(word);
                }
            }
            if !line.is_empty() {
                lines.push(line);
            }
        }
        lines.push(String::new());
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Difficulty;

    fn sample_question(description: &str) -> Question {
        Question {
            title: "Two Sum".to_string(),
            question_id: "1".to_string(),
            title_slug: "two-sum".to_string(),
            difficulty: Difficulty::Easy,
            description: description.to_string(),
            examples: Vec::new(),
            constraints: Vec::new(),
            question_url: "https://leetcode.com/problems/two-sum/".to_string(),
        }
    }

    #[test]
    fn test_question_comment_header() {
        let comment = question_comment(&sample_question("Find two numbers."));
        assert!(comment.starts_with(
            "/*\n * 1 | Two Sum\n * Difficulty: Easy\n * ----------------\n *\n * Description:"
        ));
        assert!(comment.contains(" * URL: https://leetcode.com/problems/two-sum/"));
        assert!(comment.ends_with("*/"));
    }

    #[test]
    fn test_tests_comment_header() {
        let comment = tests_comment(&sample_question(""));
        assert!(comment.starts_with("/*\n * TESTS FILE\n * 1 | Two Sum\n * Difficulty: Easy"));
        assert!(comment.ends_with("*/"));
    }

    #[test]
    fn test_wrap_packs_words_up_to_content_width() {
        let text = "word ".repeat(60);
        let lines = wrap_text(text.trim());
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= WRAP_WIDTH);
        }
    }

    #[test]
    fn test_wrap_keeps_oversized_word_on_its_own_line() {
        let word = "a".repeat(WRAP_WIDTH + 20);
        let lines = wrap_text(&format!("short {} short", word));
        assert!(lines.contains(&word));
    }

    #[test]
    fn test_wrap_separates_paragraphs_with_blank_line() {
        let lines = wrap_text("first paragraph\n\nsecond paragraph");
        assert_eq!(
            lines,
            vec![
                "first paragraph".to_string(),
                String::new(),
                "second paragraph".to_string(),
            ]
        );
    }

    #[test]
    fn test_wrap_preserves_bullet_line_breaks() {
        let lines = wrap_text("Rules:\n -> first\n -> second");
        assert_eq!(
            lines,
            vec![
                "Rules:".to_string(),
                "-> first".to_string(),
                "-> second".to_string(),
            ]
        );
    }

    #[test]
    fn test_wrap_drops_trailing_blank_line() {
        let lines = wrap_text("only paragraph");
        assert_eq!(lines, vec!["only paragraph".to_string()]);
    }

    #[test]
    fn test_empty_description_produces_no_wrapped_lines() {
        assert!(wrap_text("").is_empty());
    }
}
