use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Lexicon weights live in -3..=3; used to normalize polarity into [-1, 1].
const MAX_WORD_WEIGHT: f64 = 3.0;

/// Sentiment of one piece of text: polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    pub const NEUTRAL: Sentiment = Sentiment {
        polarity: 0.0,
        subjectivity: 0.0,
    };
}

/// Opaque scoring boundary: text in, sentiment out. The aggregator only
/// sees this trait, so tests inject deterministic fakes.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Sentiment;
}

/// Built-in lexicon scorer.
///
/// Negation: if a negator appears within the previous 1..=3 tokens, the
/// word's lexicon score is sign-flipped ("not good" reads negative).
/// Polarity is the adjusted sum over sentiment-bearing words normalized by
/// the maximum weight; subjectivity is the share of tokens that carried
/// any sentiment at all.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn word_weight(w: &str) -> i32 {
        *LEXICON.get(w).unwrap_or(&0)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Sentiment {
        // Collect so the negation window can index backwards.
        let tokens: Vec<String> = tokenize(text).collect();

        let mut sum: i32 = 0;
        let mut hits: usize = 0;
        for i in 0..tokens.len() {
            let base = Self::word_weight(&tokens[i]);
            if base == 0 {
                continue;
            }
            let negated = (1..=3).any(|k| i >= k && is_negator(&tokens[i - k]));
            sum += if negated { -base } else { base };
            hits += 1;
        }

        if hits == 0 {
            return Sentiment::NEUTRAL;
        }

        let polarity = (f64::from(sum) / (MAX_WORD_WEIGHT * hits as f64)).clamp(-1.0, 1.0);
        let subjectivity = (hits as f64 / tokens.len() as f64).clamp(0.0, 1.0);
        Sentiment {
            polarity,
            subjectivity,
        }
    }
}

/// Alphanumeric tokens, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

/// Tokenization splits on apostrophes, so contractions arrive as "isn" + "t".
fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not" | "no" | "never" | "isn" | "wasn" | "aren" | "won" | "don" | "cannot" | "without"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_and_negative_words_split_the_range() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("I love this!").polarity > 0.0);
        assert!(scorer.score("I hate this.").polarity < 0.0);
    }

    #[test]
    fn unknown_words_are_neutral() {
        let s = LexiconScorer::new().score("It is a thing.");
        assert_eq!(s, Sentiment::NEUTRAL);
    }

    #[test]
    fn negation_flips_the_sign() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("this is good");
        let negated = scorer.score("this is not good");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn outputs_stay_in_range() {
        let scorer = LexiconScorer::new();
        for text in [
            "love love love love",
            "hate hate hate hate",
            "great terrible good bad",
            "",
        ] {
            let s = scorer.score(text);
            assert!((-1.0..=1.0).contains(&s.polarity), "{text}");
            assert!((0.0..=1.0).contains(&s.subjectivity), "{text}");
        }
    }
}
