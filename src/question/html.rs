//! Plain-text extraction from LeetCode problem markup.
//!
//! The problem page HTML is split into three sections: the description
//! (everything before the first example marker), the example blocks and the
//! constraint list. Inside the description, inline code spans, preformatted
//! blocks and unordered lists are rewritten into textual conventions that
//! survive the conversion to a plain comment block.

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

/// Marker element that opens the first worked example on a problem page.
/// Everything before it is the description region.
const EXAMPLE_MARKER: &str = r#"<strong class="example">"#;

/// Parsed problem markup, separated into description, examples and
/// constraints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedContent {
    pub description: String,
    pub examples: Vec<String>,
    pub constraints: Vec<String>,
}

/// Parses raw problem HTML into a [`ParsedContent`].
///
/// Empty markup yields empty sections rather than an error; a missing
/// example marker means the whole document is treated as the description.
pub fn parse_problem_html(html: &str) -> ParsedContent {
    let document = Html::parse_fragment(html);

    let description_region = match html.find(EXAMPLE_MARKER) {
        Some(index) => &html[..index],
        None => html,
    };

    ParsedContent {
        description: extract_description(description_region.trim()),
        examples: extract_examples(&document),
        constraints: extract_constraints(&document),
    }
}

/// Renders the description region to text, applying the structural
/// rewrites for code, pre and list elements.
fn extract_description(region: &str) -> String {
    let fragment = Html::parse_fragment(region);

    let mut text = String::new();
    for child in fragment.tree.root().children() {
        if let Some(element) = ElementRef::wrap(child) {
            render_element(element, &mut text);
        }
    }

    let text = text.replace("\r\n", "\n");
    let collapsed = Regex::new(r"\n{3,}").unwrap().replace_all(&text, "\n\n");
    collapsed.trim().to_string()
}

/// Walks an element's children, emitting text nodes verbatim and rewriting
/// the structural elements:
///
/// - `<code>` becomes its trimmed text wrapped in double quotes
/// - `<pre>` becomes a ` -> ` line followed by a blank line
/// - `<ul>` becomes one ` -> ` line per item, surrounded by blank lines
fn render_element(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            match child_element.value().name() {
                "code" => {
                    let code_text: String = child_element.text().collect();
                    out.push('"');
                    out.push_str(code_text.trim());
                    out.push('"');
                }
                "pre" => {
                    out.push_str("\n -> ");
                    out.push_str(text_with_quoted_code(child_element).trim());
                    out.push_str("\n\n");
                }
                "ul" => {
                    out.push('\n');
                    for item in child_element.children().filter_map(ElementRef::wrap) {
                        if item.value().name() != "li" {
                            continue;
                        }
                        out.push_str(" -> ");
                        out.push_str(text_with_quoted_code(item).trim());
                        out.push('\n');
                    }
                    out.push('\n');
                }
                _ => render_element(child_element, out),
            }
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
}

/// Collects the text content of an element, quoting nested code spans.
/// Nested lists are flattened into the surrounding text.
fn text_with_quoted_code(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_inline(element, &mut out);
    out
}

fn collect_inline(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            if child_element.value().name() == "code" {
                let code_text: String = child_element.text().collect();
                out.push('"');
                out.push_str(code_text.trim());
                out.push('"');
            } else {
                collect_inline(child_element, out);
            }
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
}

/// Collects every preformatted block of the full document, in order.
fn extract_examples(document: &Html) -> Vec<String> {
    let pre_selector = Selector::parse("pre").unwrap();
    document
        .select(&pre_selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

/// Collects the items of the list following the first paragraph that
/// mentions `Constraints:`. Absence of such a paragraph yields an empty
/// list.
fn extract_constraints(document: &Html) -> Vec<String> {
    let paragraph_selector = Selector::parse("p").unwrap();
    let item_selector = Selector::parse("li").unwrap();

    document
        .select(&paragraph_selector)
        .find(|paragraph| {
            paragraph
                .text()
                .collect::<String>()
                .contains("Constraints:")
        })
        .and_then(|paragraph| paragraph.next_siblings().find_map(ElementRef::wrap))
        .filter(|element| element.value().name() == "ul")
        .map(|list| {
            list.select(&item_selector)
                .map(|item| item.text().collect::<String>().trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_markup_yields_empty_sections() {
        let parsed = parse_problem_html("");
        assert_eq!(parsed, ParsedContent::default());
    }

    #[test]
    fn test_code_spans_are_quoted() {
        let parsed = parse_problem_html("<p>Given <code>n</code> integers.</p>");
        assert_eq!(parsed.description, "Given \"n\" integers.");
    }

    #[test]
    fn test_code_span_text_is_trimmed_before_quoting() {
        let parsed = parse_problem_html("<p>Return <code> nums </code>.</p>");
        assert_eq!(parsed.description, "Return \"nums\".");
    }

    #[test]
    fn test_unordered_lists_become_arrow_bullets() {
        let parsed = parse_problem_html("<p>Rules:</p><ul><li>first rule</li><li>second rule</li></ul>");
        assert_eq!(parsed.description, "Rules:\n -> first rule\n -> second rule");
    }

    #[test]
    fn test_list_items_quote_nested_code() {
        let parsed = parse_problem_html("<ul><li>use <code>fn</code> here</li></ul>");
        assert_eq!(parsed.description, "-> use \"fn\" here");
    }

    #[test]
    fn test_nested_lists_are_flattened_into_parent_items() {
        let html = "<ul><li>outer<ul><li>inner</li></ul></li></ul>";
        let parsed = parse_problem_html(html);
        assert_eq!(parsed.description, "-> outerinner");
    }

    #[test]
    fn test_pre_blocks_in_description_become_arrow_lines() {
        let parsed = parse_problem_html("<p>Intro</p><pre>x = 1</pre><p>Outro</p>");
        assert_eq!(parsed.description, "Intro\n -> x = 1\n\nOutro");
    }

    #[test]
    fn test_description_stops_at_example_marker() {
        let html = concat!(
            "<p>The actual description.</p>",
            "<p><strong class=\"example\">Example 1:</strong></p>",
            "<pre>Input: 1\nOutput: 2</pre>",
        );
        let parsed = parse_problem_html(html);
        assert_eq!(parsed.description, "The actual description.");
        assert_eq!(parsed.examples, vec!["Input: 1\nOutput: 2"]);
    }

    #[test]
    fn test_examples_preserve_document_order() {
        let html = "<pre>first</pre><p>between</p><pre>second</pre>";
        let parsed = parse_problem_html(html);
        assert_eq!(parsed.examples, vec!["first", "second"]);
    }

    #[test]
    fn test_no_pre_blocks_yield_empty_examples() {
        let parsed = parse_problem_html("<p>No examples here.</p>");
        assert!(parsed.examples.is_empty());
    }

    #[test]
    fn test_constraints_extracted_in_order() {
        let html = concat!(
            "<p><strong>Constraints:</strong></p>",
            "<ul><li><code>1 &lt;= n &lt;= 100</code></li><li>n is odd</li></ul>",
        );
        let parsed = parse_problem_html(html);
        assert_eq!(parsed.constraints, vec!["1 <= n <= 100", "n is odd"]);
    }

    #[test]
    fn test_missing_constraints_paragraph_yields_empty_list() {
        let parsed = parse_problem_html("<p>Nothing to see.</p><ul><li>not a constraint</li></ul>");
        assert!(parsed.constraints.is_empty());
    }

    #[test]
    fn test_only_first_constraints_paragraph_is_used() {
        let html = concat!(
            "<p>Constraints:</p><ul><li>first</li></ul>",
            "<p>Constraints:</p><ul><li>second</li></ul>",
        );
        let parsed = parse_problem_html(html);
        assert_eq!(parsed.constraints, vec!["first"]);
    }

    #[test]
    fn test_blank_line_runs_are_collapsed() {
        let parsed = parse_problem_html("<p>one</p>\n\n\n\n<p>two</p>");
        assert_eq!(parsed.description, "one\n\ntwo");
    }

    #[test]
    fn test_windows_line_endings_are_normalized() {
        let parsed = parse_problem_html("<p>one\r\ntwo</p>");
        assert_eq!(parsed.description, "one\ntwo");
    }
}
