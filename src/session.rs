//! Live analysis session
//!
//! Owns the accumulated analysis results and the active model selection. Every
//! new batch is appended and the summary is recomputed from the full list.

use crate::analysis::{Aggregator, Summary};
use crate::client::DashboardApi;
use crate::error::{DashboardError, Result};
use crate::types::{AnalysisResult, LiveAnalysisRequest, ModelConfig};
use tracing::info;

pub struct LiveSession {
    aggregator: Aggregator,
    model: ModelConfig,
    results: Vec<AnalysisResult>,
}

impl LiveSession {
    pub fn new(aggregator: Aggregator, model: ModelConfig) -> Self {
        Self {
            aggregator,
            model,
            results: Vec::new(),
        }
    }

    pub fn model(&self) -> ModelConfig {
        self.model
    }

    pub fn set_model(&mut self, model: ModelConfig) {
        self.model = model;
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Append results from an external source
    pub fn extend(&mut self, results: impl IntoIterator<Item = AnalysisResult>) {
        self.results.extend(results);
    }

    /// Summary of everything collected so far
    pub fn summary(&self) -> Result<Summary> {
        self.aggregator
            .summarize(&self.results)
            .ok_or(DashboardError::NoData)
    }

    /// Run a live analysis, append its results, and summarize the full list
    pub async fn run<A: DashboardApi + ?Sized>(
        &mut self,
        api: &A,
        keyword: &str,
        count: u32,
    ) -> Result<Summary> {
        let request = LiveAnalysisRequest::new(keyword, count, self.model);
        let batch = api.analyze(&request).await?;
        info!(
            "Received {} results for '{}' ({} total)",
            batch.len(),
            keyword,
            self.results.len() + batch.len()
        );
        self.results.extend(batch);
        self.summary()
    }

    /// Drop collected results
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Reset the backend, then drop collected results
    pub async fn reset<A: DashboardApi + ?Sized>(&mut self, api: &A) -> Result<String> {
        let response = api.reset().await?;
        self.clear();
        Ok(response.status)
    }
}
