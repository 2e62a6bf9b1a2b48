mod client;
mod comment;
mod fetcher;
mod html;
mod model;
mod url;

pub use client::{FetchError, GRAPHQL_ENDPOINT, MetadataClient, QuestionMetadata, RawQuestion};
pub use comment::{COMMENT_WIDTH, question_comment, tests_comment};
pub use fetcher::{PremiumContentError, QuestionError, QuestionFetcher};
pub use html::{ParsedContent, parse_problem_html};
pub use model::{Difficulty, Question};
pub use url::{MalformedUrlError, canonical_url, parse_slug};
