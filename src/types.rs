//! Core domain types
//!
//! Analysis results are normalized at deserialization time: unknown sentiment
//! labels become `Neutral`, missing confidence becomes `0.5`, blank optional
//! fields become `None`. Nothing downstream has to re-check them.

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment label assigned to an analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// All labels in display order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Parse a backend label; only the exact labels are recognized, anything
    /// else is `Neutral`
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Sentiment::Positive,
            "Negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// +1 for Positive, -1 for Negative, 0 for Neutral
    pub fn sign(&self) -> i64 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Negative => -1,
            Sentiment::Neutral => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Model confidence, nominally within [0, 1]. The backend value is kept as
/// reported; only non-finite values are replaced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Used when the backend omits a confidence score
    pub const DEFAULT: Confidence = Confidence(0.5);

    /// Non-finite values fall back to the default
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Confidence(value)
        } else {
            Self::DEFAULT
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One analyzed social-media post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAnalysisResult")]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// LIME/SHAP payload, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<serde_json::Value>,
}

impl AnalysisResult {
    pub fn new(text: impl Into<String>, sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            text: text.into(),
            sentiment,
            confidence: Confidence::new(confidence),
            country: None,
            user_id: None,
            username: None,
            explanation: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = non_blank(Some(country.into()));
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>, username: impl Into<String>) -> Self {
        self.user_id = non_blank(Some(user_id.into()));
        self.username = non_blank(Some(username.into()));
        self
    }

    /// Country used for grouping
    pub fn country_or_unknown(&self) -> &str {
        self.country.as_deref().unwrap_or("Unknown")
    }

    /// Username for display
    pub fn display_username(&self) -> &str {
        self.username.as_deref().unwrap_or("Unknown User")
    }

    /// User ID for display
    pub fn display_user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or("N/A")
    }
}

/// Wire shape of an analysis result; every field is optional and loosely typed
#[derive(Debug, Default, Deserialize)]
struct RawAnalysisResult {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    sentiment: Option<serde_json::Value>,
    #[serde(default)]
    confidence: Option<serde_json::Value>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    user_id: Option<serde_json::Value>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    explanation: Option<serde_json::Value>,
}

impl From<RawAnalysisResult> for AnalysisResult {
    fn from(raw: RawAnalysisResult) -> Self {
        let sentiment = raw
            .sentiment
            .as_ref()
            .and_then(|v| v.as_str())
            .map(Sentiment::from_label)
            .unwrap_or_default();

        let confidence = raw
            .confidence
            .as_ref()
            .and_then(|v| match v {
                serde_json::Value::Number(n) => n.as_f64(),
                serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            })
            .map(Confidence::new)
            .unwrap_or_default();

        // Backend sometimes sends numeric user ids
        let user_id = raw.user_id.and_then(|v| match v {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        Self {
            text: raw.text.unwrap_or_default(),
            sentiment,
            confidence,
            country: non_blank(raw.country),
            user_id: non_blank(user_id),
            username: non_blank(raw.username),
            explanation: raw.explanation.filter(|v| !v.is_null()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Model architectures the backend can train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelType {
    Lstm,
    Bert,
    Svm,
    Rf,
    Lr,
}

/// Training endpoint group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    DeepLearning,
    Classical,
}

impl ModelFamily {
    /// Endpoint path for training jobs of this family
    pub fn training_path(&self) -> &'static str {
        match self {
            ModelFamily::DeepLearning => "/models/deep-learning",
            ModelFamily::Classical => "/classical/classical",
        }
    }
}

impl ModelType {
    pub fn family(&self) -> ModelFamily {
        match self {
            ModelType::Lstm | ModelType::Bert => ModelFamily::DeepLearning,
            ModelType::Svm | ModelType::Rf | ModelType::Lr => ModelFamily::Classical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Lstm => "LSTM",
            ModelType::Bert => "BERT",
            ModelType::Svm => "SVM",
            ModelType::Rf => "RF",
            ModelType::Lr => "LR",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LSTM" => Ok(ModelType::Lstm),
            "BERT" => Ok(ModelType::Bert),
            "SVM" => Ok(ModelType::Svm),
            "RF" => Ok(ModelType::Rf),
            "LR" => Ok(ModelType::Lr),
            other => Err(DashboardError::Validation(format!("unknown model type: {}", other))),
        }
    }
}

/// Explainability method applied to predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExplainMethod {
    Lime,
    Shap,
}

impl ExplainMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplainMethod::Lime => "LIME",
            ExplainMethod::Shap => "SHAP",
        }
    }
}

impl fmt::Display for ExplainMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ExplainMethod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LIME" => Ok(ExplainMethod::Lime),
            "SHAP" => Ok(ExplainMethod::Shap),
            other => Err(DashboardError::Validation(format!("unknown explainability method: {}", other))),
        }
    }
}

/// Model selection shared by training and live analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfig {
    pub model_type: ModelType,
    pub explain_method: ExplainMethod,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::Bert,
            explain_method: ExplainMethod::Lime,
        }
    }
}

impl fmt::Display for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.model_type, self.explain_method)
    }
}

/// Minimum number of datasets for a training job
pub const MIN_TRAINING_DATASETS: usize = 3;

/// Training job submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub model_type: ModelType,
    pub explainability_method: ExplainMethod,
    pub split_ratio: f64,
    pub dataset_filenames: Vec<String>,
}

impl TrainingRequest {
    /// Check the request before it goes over the wire
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.dataset_filenames.len() < MIN_TRAINING_DATASETS {
            return Err(DashboardError::Validation(format!(
                "Minimum {} datasets are required for training",
                MIN_TRAINING_DATASETS
            )));
        }
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            return Err(DashboardError::Validation(format!(
                "split ratio must be between 0 and 1, got {}",
                self.split_ratio
            )));
        }
        Ok(())
    }
}

/// Evaluation metrics reported after training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    #[serde(default)]
    pub confusion_matrix: Vec<Vec<u64>>,
}

/// Response to a training submission
///
/// Deep-learning jobs return metrics inline; classical jobs return a task id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub metrics: Option<Metrics>,
    #[serde(default)]
    pub task_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub backend: String,
    #[serde(rename = "lastTrained")]
    pub last_trained: String,
    #[serde(rename = "datasetsUsed")]
    pub datasets_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestModel {
    pub name: String,
    pub f1: f64,
    pub accuracy: f64,
    pub explainability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub name: String,
    pub f1: f64,
}

/// Trained vs live score for one metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub name: String,
    #[serde(rename = "Trained")]
    pub trained: f64,
    #[serde(rename = "Live")]
    pub live: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub name: String,
    pub size: u64,
}

/// Dashboard landing page statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub status: String,
    pub system_status: SystemStatus,
    #[serde(default)]
    pub best_model: Option<BestModel>,
    #[serde(default)]
    pub performance_data: Vec<PerformanceEntry>,
    #[serde(default)]
    pub comparison_data: Vec<ComparisonEntry>,
    #[serde(default)]
    pub datasets: Vec<DatasetSummary>,
}

impl DashboardStats {
    /// True until at least one model has been trained
    pub fn is_empty(&self) -> bool {
        self.status == "empty"
    }
}

fn default_count() -> u32 {
    100
}

/// Live social-media analysis trigger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveAnalysisRequest {
    pub keyword: String,
    #[serde(default = "default_count")]
    pub count: u32,
    pub model_type: ModelType,
    pub explainability_method: ExplainMethod,
}

impl LiveAnalysisRequest {
    pub fn new(keyword: impl Into<String>, count: u32, model: ModelConfig) -> Self {
        Self {
            keyword: keyword.into(),
            count,
            model_type: model.model_type,
            explainability_method: model.explain_method,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_from_label() {
        assert_eq!(Sentiment::from_label("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("Negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("Neutral"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("Mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(""), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(" Positive "), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_sign() {
        assert_eq!(Sentiment::Positive.sign(), 1);
        assert_eq!(Sentiment::Negative.sign(), -1);
        assert_eq!(Sentiment::Neutral.sign(), 0);
    }

    #[test]
    fn test_confidence_keeps_raw_value() {
        assert_eq!(Confidence::new(1.7).value(), 1.7);
        assert_eq!(Confidence::new(-0.2).value(), -0.2);
        assert_eq!(Confidence::new(f64::INFINITY).value(), 0.5);
        assert_eq!(Confidence::new(f64::NAN).value(), 0.5);
        assert_eq!(Confidence::new(0.0).value(), 0.0);
    }

    #[test]
    fn test_result_deserialization_full() {
        let json = r#"{
            "text": "The model works great",
            "sentiment": "Positive",
            "confidence": 0.91,
            "user_id": "1234567",
            "username": "@Alice42",
            "country": "UK"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence.value(), 0.91);
        assert_eq!(result.country_or_unknown(), "UK");
        assert_eq!(result.display_username(), "@Alice42");
    }

    #[test]
    fn test_result_deserialization_lenient() {
        let json = r#"{
            "text": "hmm",
            "sentiment": "bogus",
            "user_id": 99,
            "country": ""
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, Confidence::DEFAULT);
        assert_eq!(result.country, None);
        assert_eq!(result.country_or_unknown(), "Unknown");
        assert_eq!(result.user_id.as_deref(), Some("99"));
        assert_eq!(result.display_username(), "Unknown User");
    }

    #[test]
    fn test_result_out_of_range_confidence_kept() {
        let json = r#"{"text": "x", "sentiment": "Positive", "confidence": 1.7}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.confidence.value(), 1.7);
    }

    #[test]
    fn test_result_padded_label_is_neutral() {
        let json = r#"{"text": "x", "sentiment": " Negative"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_display_placeholders() {
        let anonymous = AnalysisResult::new("x", Sentiment::Neutral, 0.5);
        assert_eq!(anonymous.display_user_id(), "N/A");
        assert_eq!(anonymous.display_username(), "Unknown User");

        let known = anonymous.with_user("42", "@bob");
        assert_eq!(known.display_user_id(), "42");
    }

    #[test]
    fn test_result_confidence_as_string() {
        let json = r#"{"text": "x", "sentiment": "Negative", "confidence": "0.25"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.confidence.value(), 0.25);
    }

    #[test]
    fn test_result_serialization() {
        let result = AnalysisResult::new("hello world", Sentiment::Negative, 0.8).with_country("USA");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"sentiment\":\"Negative\""));
        assert!(json.contains("\"confidence\":0.8"));
        assert!(json.contains("\"country\":\"USA\""));
        assert!(!json.contains("user_id"));

        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_model_family_routing() {
        assert_eq!(ModelType::Lstm.family().training_path(), "/models/deep-learning");
        assert_eq!(ModelType::Bert.family().training_path(), "/models/deep-learning");
        assert_eq!(ModelType::Svm.family().training_path(), "/classical/classical");
        assert_eq!(ModelType::Rf.family(), ModelFamily::Classical);
        assert_eq!(ModelType::Lr.family(), ModelFamily::Classical);
    }

    #[test]
    fn test_model_type_parse() {
        assert_eq!("lstm".parse::<ModelType>().unwrap(), ModelType::Lstm);
        assert_eq!("BERT".parse::<ModelType>().unwrap(), ModelType::Bert);
        assert!("gpt".parse::<ModelType>().is_err());
        assert_eq!("shap".parse::<ExplainMethod>().unwrap(), ExplainMethod::Shap);
    }

    #[test]
    fn test_model_config_display() {
        assert_eq!(ModelConfig::default().to_string(), "BERT_LIME");
    }

    #[test]
    fn test_training_request_serialization() {
        let req = TrainingRequest {
            model_type: ModelType::Lstm,
            explainability_method: ExplainMethod::Shap,
            split_ratio: 0.8,
            dataset_filenames: vec!["a.csv".into(), "b.csv".into(), "c.csv".into()],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"model_type\":\"LSTM\""));
        assert!(json.contains("\"explainability_method\":\"SHAP\""));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_training_request_needs_three_datasets() {
        let req = TrainingRequest {
            model_type: ModelType::Bert,
            explainability_method: ExplainMethod::Lime,
            split_ratio: 0.8,
            dataset_filenames: vec!["a.csv".into(), "b.csv".into()],
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Minimum 3 datasets"));
    }

    #[test]
    fn test_training_request_split_ratio() {
        let req = TrainingRequest {
            model_type: ModelType::Bert,
            explainability_method: ExplainMethod::Lime,
            split_ratio: 1.0,
            dataset_filenames: vec!["a".into(), "b".into(), "c".into()],
        };
        assert!(matches!(req.validate(), Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let json = r#"{
            "status": "empty",
            "system_status": {"backend": "Healthy", "lastTrained": "Not Trained", "datasetsUsed": 0}
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert!(stats.is_empty());
        assert!(stats.best_model.is_none());
        assert!(stats.performance_data.is_empty());
    }

    #[test]
    fn test_dashboard_stats_ready() {
        let json = r#"{
            "status": "ready",
            "system_status": {"backend": "Healthy", "lastTrained": "26-Dec-2025 10:45 AM", "datasetsUsed": 3},
            "best_model": {"name": "BERT", "f1": 0.87, "accuracy": 0.88, "explainability": "SHAP"},
            "performance_data": [{"name": "BERT", "f1": 0.87}, {"name": "LSTM", "f1": 0.84}],
            "comparison_data": [{"name": "Accuracy", "Trained": 0.88, "Live": 0.78}],
            "datasets": [{"name": "Twitter Sentiment", "size": 1500}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert!(!stats.is_empty());
        assert_eq!(stats.system_status.datasets_used, 3);
        assert_eq!(stats.best_model.unwrap().name, "BERT");
        assert_eq!(stats.comparison_data[0].live, 0.78);
        assert_eq!(stats.datasets[0].size, 1500);
    }

    #[test]
    fn test_live_request_default_count() {
        let json = r#"{"keyword": "AI", "model_type": "BERT", "explainability_method": "LIME"}"#;
        let req: LiveAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.count, 100);
        assert_eq!(req.model_type, ModelType::Bert);
    }
}
