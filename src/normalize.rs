//! Noise removal for raw post text.
//!
//! Posts arrive full of artifacts that confuse both the sentiment scorer
//! and the word counter: emoji, `#`/`@` markers, repost tags, bare numbers,
//! shorthand and URLs. `clean` strips them with an explicit ordered rule
//! list; order matters (prefix markers must go before URL detection, emoji
//! before the token-boundary rules).

use once_cell::sync::Lazy;
use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid cleanup pattern"),
            replacement,
        }
    }
}

/// Rules run top to bottom, each output feeding the next. Leading-boundary
/// captures are re-emitted via `${1}` so only the marker itself is dropped.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Emoji / pictograph / symbol code-point denylist.
        Rule::new(
            "[\
             \\x{1F600}-\\x{1F64F}\
             \\x{1F300}-\\x{1F5FF}\
             \\x{1F680}-\\x{1F6FF}\
             \\x{1F1E0}-\\x{1F1FF}\
             \\x{2500}-\\x{2BEF}\
             \\x{2702}-\\x{27B0}\
             \\x{24C2}-\\x{1F251}\
             \\x{1F926}-\\x{1F937}\
             \\x{10000}-\\x{10FFFF}\
             \\x{2640}-\\x{2642}\
             \\x{2600}-\\x{2B55}\
             \\x{200D}\\x{23CF}\\x{23E9}\\x{231A}\\x{FE0F}\\x{3030}\
             ]+",
            "",
        ),
        // Hashtag/mention marker; the word after it stays.
        Rule::new(r"(^|\W)[#@]", "${1}"),
        // Standalone numbers, optionally $-prefixed / %-suffixed.
        Rule::new(r"(^|\W)\$?[0-9]+%?", "${1}"),
        // Repost tag.
        Rule::new(r"(?i)\bRT\b", ""),
        // Ellipsis artifacts.
        Rule::new("\\x{2026}+", ""),
        // Shorthand stopwords: with / because / without.
        Rule::new(r"(?i)(?:^|\b)(w|w/|bc|b/c|wo|w/o)(?:\b|$)", ""),
        // URLs up to whitespace or punctuation outside the allowed set.
        Rule::new(r"(?i)(^|\W)https?://[\w./&%]+\b", "${1}"),
    ]
});

/// Strip noise tokens from raw post text. Total over any input; the output
/// may contain irregular runs of spaces, which downstream tokenization
/// treats as a single separator.
pub fn clean(text: &str) -> String {
    let mut out = text.to_string();
    for rule in RULES.iter() {
        out = rule.pattern.replace_all(&out, rule.replacement).into_owned();
    }
    out
}
