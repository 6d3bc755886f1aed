//! Word frequencies over the cleaned text of a post collection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::normalize::clean;
use crate::source::Post;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Sorted by count descending; equal counts keep first-seen order.
pub type WordFrequencyTable = Vec<WordCount>;

/// Tokenize each post's cleaned text on whitespace and count occurrences.
///
/// Counting is case-sensitive and applies no normalization beyond the
/// cleanup rules; "Rust" and "rust" are separate entries. The table is not
/// truncated here; display limits belong to the presentation layer.
pub fn count_words(posts: &[Post]) -> WordFrequencyTable {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for post in posts {
        let cleaned = clean(&post.text);
        for word in cleaned.split_whitespace() {
            match counts.get_mut(word) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(word.to_string(), 1);
                    first_seen.push(word.to_string());
                }
            }
        }
    }

    let mut table: WordFrequencyTable = first_seen
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            WordCount { word, count }
        })
        .collect();
    // sort_by is stable, so ties stay in first-seen order
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}
