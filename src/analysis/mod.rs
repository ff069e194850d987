//! Analysis result aggregation
//!
//! Derives chart-ready summary tables from live analysis results. The transform
//! is pure: input is borrowed, every call recomputes from scratch, and an empty
//! input yields `None` rather than a zero-filled summary.

pub mod aggregator;
pub mod keywords;

pub use aggregator::{
    Aggregator, ConfidenceHistogram, CountryCount, CountrySentiment, HistogramBucket,
    SentimentCounts, SentimentSplit, SourceCount, SourceDistribution, Summary,
    TimeSeriesBucket, HISTOGRAM_BUCKETS, SOURCE_LABELS,
};
pub use keywords::{KeywordCount, KeywordStats, KeywordTally};
