use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

// `\W` is Unicode-aware in `regex`: letters of every script, marks, decimal
// digits and connector punctuation all count as word characters.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("non-word pattern is valid"));

/// Word frequencies computed from a single uploaded document.
///
/// `total_words` counts every token including duplicates, while
/// `word_counts` holds one entry per distinct lowercased token.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordCountResult {
    #[serde(alias = "TotalWords", default)]
    pub total_words: u64,
    #[serde(alias = "WordCounts", default)]
    pub word_counts: BTreeMap<String, u64>,
}

impl WordCountResult {
    /// Tokenizes `text` on runs of non-word characters and tallies the
    /// lowercased tokens.
    pub fn count(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::default();
        }

        let mut total_words = 0;
        let mut word_counts = BTreeMap::new();
        for word in NON_WORD.split(text).filter(|w| !w.is_empty()) {
            total_words += 1;
            *word_counts.entry(word.to_lowercase()).or_insert(0) += 1;
        }

        Self {
            total_words,
            word_counts,
        }
    }

    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }
}
