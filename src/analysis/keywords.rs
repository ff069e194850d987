//! Keyword extraction and per-keyword sentiment tallies

use crate::types::Sentiment;
use serde::Serialize;
use std::collections::HashMap;

/// Tokens containing any of these are dropped
pub const STOP_WORDS: [&str; 6] = ["this", "that", "with", "from", "have", "http"];

/// Tokens must be longer than this (in characters)
pub const MIN_TOKEN_LEN: usize = 3;

/// Lowercased whitespace-separated tokens that qualify as keywords
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| is_keyword(w))
}

/// Long enough and not a near-match of a stop word
pub fn is_keyword(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_LEN && !STOP_WORDS.iter().any(|sw| token.contains(sw))
}

/// Keyword with its raw frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub name: String,
    pub count: usize,
}

/// Keyword with frequency and mean sentiment sign
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordStats {
    pub name: String,
    pub frequency: usize,
    /// Mean of +1/-1/0 over every occurrence, in [-1, 1]
    pub score: f64,
}

impl KeywordStats {
    /// Score rounded to two decimals for chart labels
    pub fn display_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    count: usize,
    score_sum: i64,
}

/// Insertion-ordered keyword tally; ties keep first-seen order when ranked
#[derive(Debug, Default)]
pub struct KeywordTally {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl KeywordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every keyword in `text` under the given sentiment
    pub fn add_text(&mut self, text: &str, sentiment: Sentiment) {
        for token in tokenize(text) {
            self.add_token(token, sentiment);
        }
    }

    fn add_token(&mut self, token: String, sentiment: Sentiment) {
        let idx = match self.index.get(&token) {
            Some(&idx) => idx,
            None => {
                self.entries.push(Entry {
                    name: token.clone(),
                    count: 0,
                    score_sum: 0,
                });
                self.index.insert(token, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx];
        entry.count += 1;
        entry.score_sum += sentiment.sign();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn ranked(&self) -> Vec<&Entry> {
        let mut ranked: Vec<&Entry> = self.entries.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Most frequent keywords, unfiltered
    pub fn top(&self, limit: usize) -> Vec<KeywordCount> {
        self.ranked()
            .into_iter()
            .take(limit)
            .map(|e| KeywordCount {
                name: e.name.clone(),
                count: e.count,
            })
            .collect()
    }

    /// Keywords seen more than `min_frequency` times, ranked by frequency
    pub fn stats(&self, min_frequency: usize, limit: usize) -> Vec<KeywordStats> {
        self.ranked()
            .into_iter()
            .filter(|e| e.count > min_frequency)
            .take(limit)
            .map(|e| KeywordStats {
                name: e.name.clone(),
                frequency: e.count,
                score: e.score_sum as f64 / e.count as f64,
            })
            .collect()
    }
}
