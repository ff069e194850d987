//! HTTP client for the sentiment analysis backend

use super::DashboardApi;
use crate::config::ApiConfig;
use crate::error::{DashboardError, Result};
use crate::types::{
    AnalysisResult, DashboardStats, LiveAnalysisRequest, Metrics, ResetResponse, TrainingRequest,
    TrainingResponse,
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Backend API client
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }
        Ok(resp.json().await?)
    }
}

/// Map a non-2xx response to an error, preferring the backend's `detail` message
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> DashboardError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());

    if status == StatusCode::TOO_MANY_REQUESTS {
        DashboardError::RateLimited(detail)
    } else {
        DashboardError::Api(format!("{}: {}", status, detail))
    }
}

/// `/metrics` answers `{}` until a model has been trained
pub(crate) fn parse_metrics(value: serde_json::Value) -> Result<Option<Metrics>> {
    match &value {
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        serde_json::Value::Object(map) if !map.contains_key("accuracy") => Ok(None),
        serde_json::Value::Null => Ok(None),
        _ => Ok(Some(serde_json::from_value(value)?)),
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn train(&self, request: &TrainingRequest) -> Result<TrainingResponse> {
        request.validate()?;
        let path = request.model_type.family().training_path();
        info!(
            "Submitting {} training job ({} datasets, split {})",
            request.model_type,
            request.dataset_filenames.len(),
            request.split_ratio
        );

        let resp = self.http.post(self.endpoint(path)).json(request).send().await?;
        let response: TrainingResponse = Self::decode(resp).await?;

        if response.metrics.is_none() {
            debug!("Training response carried no metrics: {}", response.message);
        }
        Ok(response)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let resp = self.http.get(self.endpoint("/dashboard/stats")).send().await?;
        Self::decode(resp).await
    }

    async fn analyze(&self, request: &LiveAnalysisRequest) -> Result<Vec<AnalysisResult>> {
        if request.keyword.trim().is_empty() {
            return Err(DashboardError::Validation("keyword must not be empty".to_string()));
        }
        info!(
            "Requesting live analysis for '{}' ({} posts, {}_{})",
            request.keyword, request.count, request.model_type, request.explainability_method
        );

        let resp = self.http.post(self.endpoint("/live/analyze")).json(request).send().await?;
        let results: Vec<AnalysisResult> = Self::decode(resp).await?;

        if results.is_empty() {
            warn!("Live analysis for '{}' returned no results", request.keyword);
        }
        Ok(results)
    }

    async fn reset(&self) -> Result<ResetResponse> {
        warn!("Resetting backend state at {}", self.base_url);
        let resp = self.http.post(self.endpoint("/api/reset")).send().await?;
        Self::decode(resp).await
    }

    async fn metrics(&self) -> Result<Option<Metrics>> {
        let resp = self.http.get(self.endpoint("/metrics/")).send().await?;
        let value: serde_json::Value = Self::decode(resp).await?;
        parse_metrics(value)
    }
}
