//! GraphQL client for the LeetCode question endpoint.
//!
//! Two fixed queries are issued per question, both parameterized only by the
//! title slug: one for the HTML content and one for the metadata record.
//! The queries are independent and run concurrently.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::question::Difficulty;

/// The LeetCode GraphQL endpoint all queries are sent to.
pub const GRAPHQL_ENDPOINT: &str = "https://leetcode.com/graphql";

const QUESTION_CONTENT_QUERY: &str = "\
query questionContent($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    content
    mysqlSchemas
  }
}";

const QUESTION_DATA_QUERY: &str = "\
query questionTitle($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    title
    titleSlug
    isPaidOnly
    difficulty
    likes
    dislikes
  }
}";

/// Errors that can occur while querying the remote endpoint.
#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
    Status(u16),
    MissingQuestion(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => {
                write!(f, "Failed to fetch question data: {}", e)
            }
            FetchError::Status(code) => {
                write!(f, "LeetCode GraphQL endpoint returned HTTP {}", code)
            }
            FetchError::MissingQuestion(slug) => {
                write!(f, "No question found for slug '{}'", slug)
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e)
    }
}

/// Metadata record returned by the question data query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionMetadata {
    pub question_id: String,
    pub question_frontend_id: String,
    pub title: String,
    pub title_slug: String,
    pub is_paid_only: bool,
    pub difficulty: Difficulty,
    pub likes: i64,
    pub dislikes: i64,
}

/// Raw fetch result: the problem HTML plus the metadata record.
///
/// A paid-only question without an active session yields an empty `content`
/// string; the assembler decides how to handle that case.
#[derive(Debug, Clone)]
pub struct RawQuestion {
    pub content: String,
    pub metadata: QuestionMetadata,
}

#[derive(Debug, Deserialize)]
struct ContentEnvelope {
    data: Option<ContentData>,
}

#[derive(Debug, Deserialize)]
struct ContentData {
    question: Option<ContentFields>,
}

#[derive(Debug, Deserialize)]
struct ContentFields {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetadataEnvelope {
    data: Option<MetadataData>,
}

#[derive(Debug, Deserialize)]
struct MetadataData {
    question: Option<QuestionMetadata>,
}

/// Client for the two question queries.
pub struct MetadataClient {
    http: reqwest::Client,
    endpoint: String,
    session: Option<String>,
}

impl MetadataClient {
    /// Creates a new MetadataClient
    ///
    /// # Arguments
    /// * `endpoint` - Optional endpoint override (defaults to the LeetCode GraphQL URL)
    /// * `session` - Optional `LEETCODE_SESSION` credential attached as a cookie
    pub fn new(endpoint: Option<String>, session: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| GRAPHQL_ENDPOINT.to_string()),
            session,
        }
    }

    /// Fetches the content and metadata for a slug, running both queries
    /// concurrently and waiting for both to complete.
    pub async fn fetch(&self, slug: &str) -> Result<RawQuestion, FetchError> {
        let (content, metadata) =
            tokio::try_join!(self.query_content(slug), self.query_metadata(slug))?;

        Ok(RawQuestion { content, metadata })
    }

    async fn query_content(&self, slug: &str) -> Result<String, FetchError> {
        let envelope: ContentEnvelope = self.post(QUESTION_CONTENT_QUERY, slug).await?;
        let fields = envelope
            .data
            .and_then(|data| data.question)
            .ok_or_else(|| FetchError::MissingQuestion(slug.to_string()))?;

        // Paid-only questions return a null content body.
        Ok(fields.content.unwrap_or_default())
    }

    async fn query_metadata(&self, slug: &str) -> Result<QuestionMetadata, FetchError> {
        let envelope: MetadataEnvelope = self.post(QUESTION_DATA_QUERY, slug).await?;
        envelope
            .data
            .and_then(|data| data.question)
            .ok_or_else(|| FetchError::MissingQuestion(slug.to_string()))
    }

    async fn post<T: DeserializeOwned>(&self, query: &str, slug: &str) -> Result<T, FetchError> {
        let body = serde_json::json!({
            "query": query,
            "variables": { "titleSlug": slug },
        });

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(session) = &self.session {
            request = request.header("Cookie", format!("LEETCODE_SESSION={}", session));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
