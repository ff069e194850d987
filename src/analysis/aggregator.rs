//! Live result aggregation
//!
//! Turns a flat list of analysis results into the chart tables shown on the
//! live results view:
//! - Sentiment counts and percentage split
//! - Top countries and sentiment by country
//! - Keyword frequency and keyword sentiment
//! - Timeline buckets (synthetic, every N results form one slot)
//! - Confidence histogram
//! - Source distribution (simulated)

use super::keywords::{KeywordCount, KeywordStats, KeywordTally};
use crate::config::AnalysisConfig;
use crate::types::{AnalysisResult, Sentiment};
use chrono::{Duration, Local, NaiveDateTime};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Number of confidence histogram buckets
pub const HISTOGRAM_BUCKETS: usize = 10;

/// Labels assigned to results by the simulated source distribution
pub const SOURCE_LABELS: [&str; 4] = ["Android", "iPhone", "Web App", "Twitter Lite"];

/// Count per sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Whole-number percentages of the total
    pub fn split(&self) -> SentimentSplit {
        let total = self.total();
        let pct = |n: usize| {
            if total == 0 {
                0
            } else {
                (n as f64 * 100.0 / total as f64).round() as u32
            }
        };
        SentimentSplit {
            positive: pct(self.positive),
            negative: pct(self.negative),
            neutral: pct(self.neutral),
        }
    }
}

/// Rounded percentage per sentiment; may not add to exactly 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentSplit {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySentiment {
    pub name: String,
    #[serde(flatten)]
    pub counts: SentimentCounts,
    pub total: usize,
}

/// One synthetic timeline slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesBucket {
    pub index: usize,
    /// `HH:MM` label relative to the reference time
    pub time: String,
    #[serde(flatten)]
    pub counts: SentimentCounts,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    /// e.g. `"90-100%"`
    pub name: String,
    pub count: usize,
}

/// Ten fixed-width confidence buckets over [0, 1]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceHistogram {
    pub buckets: Vec<HistogramBucket>,
}

impl ConfidenceHistogram {
    fn new() -> Self {
        let buckets = (0..HISTOGRAM_BUCKETS)
            .map(|i| HistogramBucket {
                name: format!("{}-{}%", i * 10, (i + 1) * 10),
                count: 0,
            })
            .collect();
        Self { buckets }
    }

    /// Bucket `i` covers `[i/10, (i+1)/10)`; the last bucket also takes 1.0
    pub fn bucket_index(confidence: f64) -> usize {
        let scaled = (confidence * HISTOGRAM_BUCKETS as f64).floor();
        if scaled.is_nan() || scaled < 0.0 {
            0
        } else {
            (scaled as usize).min(HISTOGRAM_BUCKETS - 1)
        }
    }

    fn record(&mut self, confidence: f64) {
        self.buckets[Self::bucket_index(confidence)].count += 1;
    }

    pub fn counts(&self) -> Vec<usize> {
        self.buckets.iter().map(|b| b.count).collect()
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub name: String,
    pub value: usize,
}

/// Simulated posting-client distribution.
///
/// Each result is assigned one of [`SOURCE_LABELS`] uniformly at random on every
/// call. This is demo data: it is not derived from the input and differs between
/// runs on identical input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDistribution {
    pub sources: Vec<SourceCount>,
}

impl SourceDistribution {
    pub fn total(&self) -> usize {
        self.sources.iter().map(|s| s.value).sum()
    }
}

/// Every chart table derived from one result list
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub sentiment_counts: SentimentCounts,
    pub sentiment_split: SentimentSplit,
    pub countries: Vec<CountryCount>,
    pub country_sentiment: Vec<CountrySentiment>,
    pub top_keywords: Vec<KeywordCount>,
    pub keyword_sentiment: Vec<KeywordStats>,
    pub timeline: Vec<TimeSeriesBucket>,
    pub confidence_histogram: ConfidenceHistogram,
    pub sources: SourceDistribution,
}

/// Per-country accumulator, insertion ordered
#[derive(Default)]
struct CountryTally {
    order: Vec<(String, SentimentCounts)>,
    index: HashMap<String, usize>,
}

impl CountryTally {
    fn record(&mut self, country: &str, sentiment: Sentiment) {
        let idx = match self.index.get(country) {
            Some(&idx) => idx,
            None => {
                self.order.push((country.to_string(), SentimentCounts::default()));
                self.index.insert(country.to_string(), self.order.len() - 1);
                self.order.len() - 1
            }
        };
        self.order[idx].1.record(sentiment);
    }

    /// Countries by descending total; stable so ties keep first-seen order
    fn ranked(&self) -> Vec<&(String, SentimentCounts)> {
        let mut ranked: Vec<_> = self.order.iter().collect();
        ranked.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
        ranked
    }
}

/// Stateless batch aggregator over analysis results
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: AnalysisConfig,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl Aggregator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Summarize using the local clock for timeline labels.
    ///
    /// Returns `None` for an empty list so callers can show a "no data" state
    /// instead of empty charts.
    pub fn summarize(&self, results: &[AnalysisResult]) -> Option<Summary> {
        self.summarize_at(results, Local::now().naive_local())
    }

    /// Summarize with an explicit reference time for timeline labels
    pub fn summarize_at(&self, results: &[AnalysisResult], now: NaiveDateTime) -> Option<Summary> {
        self.summarize_with(results, now, &mut rand::rng())
    }

    /// Summarize with an explicit reference time and source-label RNG
    pub fn summarize_with<R: Rng>(
        &self,
        results: &[AnalysisResult],
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Option<Summary> {
        if results.is_empty() {
            return None;
        }

        let bucket_size = self.config.bucket_size.max(1);

        let mut sentiment_counts = SentimentCounts::default();
        let mut countries = CountryTally::default();
        let mut keywords = KeywordTally::new();
        let mut timeline: Vec<TimeSeriesBucket> = Vec::new();
        let mut histogram = ConfidenceHistogram::new();
        let mut source_counts = [0usize; SOURCE_LABELS.len()];
        let mut source_order: Vec<usize> = Vec::with_capacity(SOURCE_LABELS.len());

        for (position, result) in results.iter().enumerate() {
            let sentiment = result.sentiment;

            sentiment_counts.record(sentiment);
            countries.record(result.country_or_unknown(), sentiment);
            keywords.add_text(&result.text, sentiment);

            let slot = position / bucket_size;
            if timeline.len() <= slot {
                timeline.push(TimeSeriesBucket {
                    index: slot,
                    time: self.slot_label(now, slot),
                    counts: SentimentCounts::default(),
                    total: 0,
                });
            }
            let bucket = &mut timeline[slot];
            bucket.counts.record(sentiment);
            bucket.total += 1;

            histogram.record(result.confidence.value());

            let source = rng.random_range(0..SOURCE_LABELS.len());
            if source_counts[source] == 0 {
                source_order.push(source);
            }
            source_counts[source] += 1;
        }

        let ranked_countries = countries.ranked();

        let country_counts = ranked_countries
            .iter()
            .take(self.config.top_countries)
            .map(|(name, counts)| CountryCount {
                name: name.clone(),
                count: counts.total(),
            })
            .collect();

        let country_sentiment = ranked_countries
            .iter()
            .take(self.config.top_country_sentiment)
            .map(|(name, counts)| CountrySentiment {
                name: name.clone(),
                counts: *counts,
                total: counts.total(),
            })
            .collect();

        let sources = SourceDistribution {
            sources: source_order
                .into_iter()
                .map(|i| SourceCount {
                    name: SOURCE_LABELS[i].to_string(),
                    value: source_counts[i],
                })
                .collect(),
        };

        debug!(
            "Summarized {} results: {} countries, {} keywords, {} timeline slots",
            results.len(),
            countries.order.len(),
            keywords.len(),
            timeline.len()
        );

        Some(Summary {
            total: results.len(),
            sentiment_split: sentiment_counts.split(),
            sentiment_counts,
            countries: country_counts,
            country_sentiment,
            top_keywords: keywords.top(self.config.top_keywords),
            keyword_sentiment: keywords
                .stats(self.config.min_keyword_frequency, self.config.topic_keywords),
            timeline,
            confidence_histogram: histogram,
            sources,
        })
    }

    /// Slot `k` sits `(timeline_span - k) * bucket_minutes` minutes before `now`
    fn slot_label(&self, now: NaiveDateTime, slot: usize) -> String {
        let offset = (self.config.timeline_span - slot as i64) * self.config.bucket_minutes;
        (now - Duration::minutes(offset)).format("%H:%M").to_string()
    }
}
