//! Sentiment backend API client
//!
//! This module provides interfaces to the backend's REST endpoints:
//! - Training: deep-learning and classical model jobs
//! - Dashboard: summary statistics and evaluation metrics
//! - Live analysis: keyword-driven social media analysis
//! - System reset

mod api;

pub use api::ApiClient;

use crate::error::Result;
use crate::types::{
    AnalysisResult, DashboardStats, LiveAnalysisRequest, Metrics, ResetResponse, TrainingRequest,
    TrainingResponse,
};
use async_trait::async_trait;

/// Backend operations (allows mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Submit a training job; the endpoint depends on the model family
    async fn train(&self, request: &TrainingRequest) -> Result<TrainingResponse>;

    /// Fetch dashboard summary statistics
    async fn dashboard_stats(&self) -> Result<DashboardStats>;

    /// Run a live analysis and return results in backend order
    async fn analyze(&self, request: &LiveAnalysisRequest) -> Result<Vec<AnalysisResult>>;

    /// Reset trained models and stored data
    async fn reset(&self) -> Result<ResetResponse>;

    /// Latest evaluation metrics, `None` before any training
    async fn metrics(&self) -> Result<Option<Metrics>>;
}
