//! Test Data Generators
//!
//! Builds synthetic analysis results shaped like the backend's live analysis
//! responses: templated sentences whose adjective matches the sentiment label,
//! random users and countries, confidence in [0.5, 1.0).

use crate::types::{AnalysisResult, Sentiment};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const SUBJECTS: [&str; 9] = [
    "This AI", "The model", "It", "The system", "This tool",
    "The algorithm", "My experience", "The output", "The process",
];
const VERBS: [&str; 9] = ["is", "seems", "looks", "feels", "performs", "behaves", "runs", "works", "acts"];
const POSITIVE: [&str; 10] = [
    "amazing", "incredible", "fantastic", "super fast", "accurate",
    "revolutionary", "game-changer", "brilliant", "helpful", "solid",
];
const NEGATIVE: [&str; 10] = [
    "terrible", "bad", "slow", "inaccurate", "confusing",
    "useless", "broken", "disappointing", "frustrating", "laggy",
];
const NEUTRAL: [&str; 10] = [
    "okay", "decent", "average", "standard", "fine",
    "nothing special", "expected", "complex", "interesting", "acceptable",
];
const CONTEXTS: [&str; 9] = [
    "for my project.", "in production.", "honestly.", "today.", "so far.",
    "surprisingly.", "to be honest.", "at scale.", "in tests.",
];
const HASHTAGS: [&str; 10] = [
    "#AI", "#Tech", "#ML", "#Data", "#Review", "#Testing", "#Dev", "#Coding", "#Innovation", "#BigData",
];
const NAMES: [&str; 10] = ["Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Liam", "Sophia", "Noah"];
const COUNTRIES: [&str; 10] = [
    "USA", "UK", "Canada", "Germany", "France", "Japan", "India", "Australia", "Brazil", "Unknown",
];

/// Generator for synthetic analysis results
pub struct ResultGenerator {
    rng: StdRng,
    keyword: String,
}

impl ResultGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            keyword: "The model".to_string(),
        }
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            keyword: "The model".to_string(),
        }
    }

    /// Use `keyword` as one of the sentence subjects
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Sentiment drawn 40/30/30 positive/negative/neutral
    pub fn sentiment(&mut self) -> Sentiment {
        let roll: f64 = self.rng.random();
        if roll < 0.4 {
            Sentiment::Positive
        } else if roll < 0.7 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// One result with the given sentiment
    pub fn result_with(&mut self, sentiment: Sentiment) -> AnalysisResult {
        let subject = if self.rng.random_bool(0.1) {
            self.keyword.clone()
        } else {
            self.pick(&SUBJECTS).to_string()
        };
        let adjectives: &[&str] = match sentiment {
            Sentiment::Positive => &POSITIVE,
            Sentiment::Negative => &NEGATIVE,
            Sentiment::Neutral => &NEUTRAL,
        };
        let text = format!(
            "{} {} {} {} {}",
            subject,
            self.pick(&VERBS),
            self.pick(adjectives),
            self.pick(&CONTEXTS),
            self.pick(&HASHTAGS)
        );

        let username = format!("@{}{}", self.pick(&NAMES), self.rng.random_range(10..1000));
        let user_id = self.rng.random_range(1_000_000..10_000_000u32).to_string();
        let confidence = self.rng.random_range(0.5..1.0);
        let country = self.pick(&COUNTRIES);

        AnalysisResult::new(text, sentiment, confidence)
            .with_user(user_id, username)
            .with_country(country)
    }

    /// One result with a random sentiment
    pub fn result(&mut self) -> AnalysisResult {
        let sentiment = self.sentiment();
        self.result_with(sentiment)
    }

    /// Generate multiple results
    pub fn results(&mut self, count: usize) -> Vec<AnalysisResult> {
        (0..count).map(|_| self.result()).collect()
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

impl Default for ResultGenerator {
    fn default() -> Self {
        Self::new()
    }
}
