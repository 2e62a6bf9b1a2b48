//! Assembly of a [`Question`] from the remote question data.

use std::fmt;
use tokio::sync::OnceCell;

use crate::question::html::parse_problem_html;
use crate::question::url::{MalformedUrlError, canonical_url, parse_slug};
use crate::question::{FetchError, MetadataClient, Question, RawQuestion};

/// The question is paid-only and its content is not accessible.
///
/// Distinguished from a generic fetch failure so the caller can report it
/// as an expected stop instead of an error.
#[derive(Debug, Clone)]
pub struct PremiumContentError {
    pub question_id: String,
    pub title: String,
}

impl fmt::Display for PremiumContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{} | {}' is a premium problem and we don't have access to it",
            self.question_id, self.title
        )
    }
}

impl std::error::Error for PremiumContentError {}

/// Errors that can occur while assembling a question
#[derive(Debug)]
pub enum QuestionError {
    MalformedUrl(MalformedUrlError),
    Fetch(FetchError),
    PremiumContent(PremiumContentError),
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::MalformedUrl(e) => write!(f, "{}", e),
            QuestionError::Fetch(e) => write!(f, "{}", e),
            QuestionError::PremiumContent(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for QuestionError {}

impl From<MalformedUrlError> for QuestionError {
    fn from(e: MalformedUrlError) -> Self {
        QuestionError::MalformedUrl(e)
    }
}

impl From<FetchError> for QuestionError {
    fn from(e: FetchError) -> Self {
        QuestionError::Fetch(e)
    }
}

impl From<PremiumContentError> for QuestionError {
    fn from(e: PremiumContentError) -> Self {
        QuestionError::PremiumContent(e)
    }
}

/// Fetches and assembles question data for one problem URL.
///
/// Construction is two-phase: `new` stores the URL, the first call to
/// [`QuestionFetcher::question`] performs the remote work. The assembled
/// question is memoized, and concurrent callers share one in-flight
/// operation instead of issuing duplicate queries.
pub struct QuestionFetcher {
    url: String,
    client: MetadataClient,
    question: OnceCell<Question>,
}

impl QuestionFetcher {
    pub fn new(url: &str) -> Self {
        let session = std::env::var("LEETCODE_SESSION").ok();
        Self::with_client(url, MetadataClient::new(None, session))
    }

    /// Creates a fetcher with an explicit client, allowing the endpoint or
    /// credential to be overridden.
    pub fn with_client(url: &str, client: MetadataClient) -> Self {
        Self {
            url: url.to_string(),
            client,
            question: OnceCell::new(),
        }
    }

    /// Returns the assembled question, fetching it on first use.
    pub async fn question(&self) -> Result<&Question, QuestionError> {
        self.question.get_or_try_init(|| self.assemble()).await
    }

    /// Factory shortcut: fetch and assemble the question for a URL.
    pub async fn create(url: &str) -> Result<Question, QuestionError> {
        let fetcher = Self::new(url);
        let question = fetcher.question().await?;
        Ok(question.clone())
    }

    async fn assemble(&self) -> Result<Question, QuestionError> {
        let slug = parse_slug(&self.url)?;
        let raw = self.client.fetch(&slug).await?;
        build_question(&self.url, raw)
    }
}

/// Merges the raw fetch result into a [`Question`], guarding against
/// paid-only questions whose content body came back empty.
fn build_question(url: &str, raw: RawQuestion) -> Result<Question, QuestionError> {
    let RawQuestion { content, metadata } = raw;

    if metadata.is_paid_only && content.is_empty() {
        return Err(PremiumContentError {
            question_id: metadata.question_frontend_id,
            title: metadata.title,
        }
        .into());
    }

    let parsed = parse_problem_html(&content);

    Ok(Question {
        title: metadata.title,
        question_id: metadata.question_frontend_id,
        title_slug: metadata.title_slug,
        difficulty: metadata.difficulty,
        description: parsed.description,
        examples: parsed.examples,
        constraints: parsed.constraints,
        question_url: canonical_url(url)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Difficulty, QuestionMetadata};

    fn metadata(is_paid_only: bool) -> QuestionMetadata {
        QuestionMetadata {
            question_id: "1768".to_string(),
            question_frontend_id: "1".to_string(),
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            is_paid_only,
            difficulty: Difficulty::Easy,
            likes: 10,
            dislikes: 1,
        }
    }

    #[test]
    fn test_build_question_merges_metadata_and_content() {
        let raw = RawQuestion {
            content: "<p>Given <code>nums</code>, find two indices.</p>".to_string(),
            metadata: metadata(false),
        };

        let question =
            build_question("https://leetcode.com/problems/two-sum/description/", raw).unwrap();

        assert_eq!(question.question_id, "1");
        assert_eq!(question.title, "Two Sum");
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert_eq!(question.description, "Given \"nums\", find two indices.");
        assert_eq!(question.question_url, "https://leetcode.com/problems/two-sum/");
    }

    #[test]
    fn test_paid_only_with_empty_content_is_premium_error() {
        let raw = RawQuestion {
            content: String::new(),
            metadata: metadata(true),
        };

        let result = build_question("https://leetcode.com/problems/two-sum/", raw);
        match result {
            Err(QuestionError::PremiumContent(premium)) => {
                assert_eq!(premium.question_id, "1");
                assert_eq!(premium.title, "Two Sum");
            }
            other => panic!("Expected PremiumContent error, got {:?}", other.map(|q| q.title)),
        }
    }

    #[test]
    fn test_paid_only_with_content_still_builds() {
        let raw = RawQuestion {
            content: "<p>Visible content.</p>".to_string(),
            metadata: metadata(true),
        };

        let question = build_question("https://leetcode.com/problems/two-sum/", raw).unwrap();
        assert_eq!(question.description, "Visible content.");
    }
}
