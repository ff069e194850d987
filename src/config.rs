//! Configuration management

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Countries shown in the top-countries chart
    pub top_countries: usize,
    /// Countries shown in the stacked sentiment-by-country chart
    pub top_country_sentiment: usize,
    /// Keywords shown in the frequency chart
    pub top_keywords: usize,
    /// Keywords shown in the keyword-sentiment chart
    pub topic_keywords: usize,
    /// Keywords must occur strictly more often than this to get a sentiment score
    pub min_keyword_frequency: usize,
    /// Consecutive results grouped into one timeline slot
    pub bucket_size: usize,
    /// Minutes represented by one timeline slot
    pub bucket_minutes: i64,
    /// Slots between the first timeline label and the reference time
    pub timeline_span: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory CSV exports are written to
    pub directory: String,
}

impl ExportConfig {
    /// Export directory with a leading `~` expanded
    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.directory).as_ref())
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("config path is not valid UTF-8: {}", path.display()))?;

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path_str).required(false))
            .add_source(config::Environment::with_prefix("SENTIBOARD").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations
    pub fn load_default() -> anyhow::Result<Self> {
        // Try loading from current directory or user config
        let paths = ["config.toml", "config.yaml", "~/.config/sentiboard/config.toml"];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if self.analysis.bucket_size == 0 {
            anyhow::bail!("analysis.bucket_size must be at least 1");
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_countries: 10,
            top_country_sentiment: 8,
            top_keywords: 10,
            topic_keywords: 8,
            min_keyword_frequency: 2,
            bucket_size: 5,
            bucket_minutes: 1,
            timeline_span: 20,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}
