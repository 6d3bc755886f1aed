//! Retrieval orchestration: one query, start to finish.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregate::{summarize, SentimentSummary};
use crate::error::{Error, Result};
use crate::sentiment::SentimentScorer;
use crate::source::{Post, PostDetail, PostSource};
use crate::words::{count_words, WordFrequencyTable};

pub const MAX_LIMIT: u16 = 100;

fn default_limit() -> u16 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryParams {
    pub term: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
    #[serde(default)]
    pub exclude_retweets: bool,
    #[serde(default)]
    pub exclude_replies: bool,
}

/// Everything the dashboard needs from one query. Built fresh per call and
/// handed to the presentation layer; nothing is kept across queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBundle {
    pub posts: Vec<Post>,
    pub details: Vec<PostDetail>,
    pub summary: SentimentSummary,
    pub words: WordFrequencyTable,
}

fn validate(params: &QueryParams) -> Result<()> {
    if params.term.trim().is_empty() {
        return Err(Error::MalformedInput(
            "search term must not be empty".into(),
        ));
    }
    if params.limit > MAX_LIMIT {
        return Err(Error::MalformedInput(format!(
            "limit {} outside 0..={MAX_LIMIT}",
            params.limit
        )));
    }
    Ok(())
}

fn build_search_expression(params: &QueryParams) -> String {
    let mut expression = params.term.trim().to_string();
    if params.exclude_retweets {
        expression.push_str(" -is:retweet");
    }
    if params.exclude_replies {
        expression.push_str(" -is:reply");
    }
    expression
}

/// Fetch matching posts, aggregate sentiment and word counts, and join the
/// per-post metadata (author username, like count).
///
/// Metadata lookups run one at a time, so latency scales linearly with the
/// result size. No retries and no caching; remote failures surface as
/// [`Error::Remote`] unmodified.
pub async fn run_query(
    source: &dyn PostSource,
    scorer: &dyn SentimentScorer,
    params: &QueryParams,
) -> Result<ResultBundle> {
    validate(params)?;

    let expression = build_search_expression(params);
    debug!(%expression, limit = params.limit, "searching posts");

    let posts = source
        .search_posts(&expression, params.limit)
        .await
        .map_err(Error::Remote)?;
    if posts.is_empty() {
        return Err(Error::EmptyResultSet);
    }

    let summary = summarize(&posts, scorer)?;
    let words = count_words(&posts);

    let mut details = Vec::with_capacity(posts.len());
    for post in &posts {
        let likers = source.get_likers(&post.id).await.map_err(Error::Remote)?;
        let like_count = likers.map(|l| l.len() as u64).unwrap_or(0);
        let user = source
            .get_user(&post.author_id)
            .await
            .map_err(Error::Remote)?;
        details.push(PostDetail {
            id: post.id.clone(),
            username: user.username,
            like_count,
        });
    }

    info!(
        posts = posts.len(),
        positive = summary.positive,
        neutral = summary.neutral,
        negative = summary.negative,
        "query complete"
    );

    Ok(ResultBundle {
        posts,
        details,
        summary,
        words,
    })
}
