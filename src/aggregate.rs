//! Corpus-level sentiment: per-post scores folded into counts and means.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalize::clean;
use crate::sentiment::SentimentScorer;
use crate::source::Post;

/// Distribution over scored posts plus mean polarity/subjectivity.
/// Invariant: `positive + neutral + negative` equals the number of posts
/// scored; zero polarity counts as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Mean polarity over all posts, in [-1, 1].
    pub polarity: f64,
    /// Mean subjectivity over all posts, in [0, 1].
    pub subjectivity: f64,
}

/// Clean and score every post, classify by polarity sign, and average.
/// Recomputed fully per query; there is no incremental state.
///
/// Zero posts is `Error::EmptyInput` so the means never divide by zero.
pub fn summarize(posts: &[Post], scorer: &dyn SentimentScorer) -> Result<SentimentSummary> {
    if posts.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut positive = 0usize;
    let mut neutral = 0usize;
    let mut negative = 0usize;
    let mut total_polarity = 0.0f64;
    let mut total_subjectivity = 0.0f64;

    for post in posts {
        let sentiment = scorer.score(&clean(&post.text));
        total_polarity += sentiment.polarity;
        total_subjectivity += sentiment.subjectivity;
        if sentiment.polarity > 0.0 {
            positive += 1;
        } else if sentiment.polarity < 0.0 {
            negative += 1;
        } else {
            neutral += 1;
        }
    }

    let count = posts.len() as f64;
    Ok(SentimentSummary {
        positive,
        neutral,
        negative,
        polarity: total_polarity / count,
        subjectivity: total_subjectivity / count,
    })
}
