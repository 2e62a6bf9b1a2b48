use std::fmt;

const PROBLEMS_MARKER: &str = "/problems/";

/// The input URL does not carry a `/problems/<slug>` path segment.
#[derive(Debug, Clone)]
pub struct MalformedUrlError {
    url: String,
}

impl fmt::Display for MalformedUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "URL '{}' does not contain a '/problems/<slug>' segment",
            self.url
        )
    }
}

impl std::error::Error for MalformedUrlError {}

/// Extracts the title slug from a LeetCode problem URL.
///
/// Trailing path segments, query strings and fragments are discarded:
/// `https://leetcode.com/problems/counter-ii/description/` yields
/// `counter-ii`.
pub fn parse_slug(url: &str) -> Result<String, MalformedUrlError> {
    let malformed = || MalformedUrlError {
        url: url.to_string(),
    };

    let (_, rest) = url.split_once(PROBLEMS_MARKER).ok_or_else(malformed)?;
    let slug = rest.split(['/', '?', '#']).next().unwrap_or_default();

    if slug.is_empty() {
        return Err(malformed());
    }

    Ok(slug.to_string())
}

/// Rebuilds the canonical problem URL from any accepted input URL.
pub fn canonical_url(url: &str) -> Result<String, MalformedUrlError> {
    Ok(format!(
        "https://leetcode.com/problems/{}/",
        parse_slug(url)?
    ))
}
