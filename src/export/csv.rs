//! CSV export of analysis results

use crate::error::{DashboardError, Result};
use crate::types::AnalysisResult;
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const HEADERS: [&str; 6] = ["User ID", "Username", "Country", "Text", "Sentiment", "Confidence"];

/// `twitter_analysis_2025-06-15T12-00-00.csv`
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!("twitter_analysis_{}.csv", at.format("%Y-%m-%dT%H-%M-%S"))
}

/// Write results as CSV. Every field is quoted with embedded quotes doubled,
/// including numeric-looking text; absent optional fields are written empty.
pub fn write_csv<W: Write>(results: &[AnalysisResult], writer: W) -> Result<()> {
    if results.is_empty() {
        return Err(DashboardError::NoData);
    }

    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv.write_record(HEADERS)?;
    for result in results {
        let confidence = result.confidence.value().to_string();
        csv.write_record([
            result.user_id.as_deref().unwrap_or(""),
            result.username.as_deref().unwrap_or(""),
            result.country.as_deref().unwrap_or(""),
            result.text.as_str(),
            result.sentiment.as_str(),
            confidence.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Render results as an in-memory CSV string
pub fn to_csv_string(results: &[AnalysisResult]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(results, &mut buf)?;
    String::from_utf8(buf).map_err(|e| DashboardError::Internal(e.to_string()))
}

/// Write results into `dir` under a timestamped filename; returns the path
pub fn export_to_dir<P: AsRef<Path>>(results: &[AnalysisResult], dir: P) -> Result<PathBuf> {
    let path = dir.as_ref().join(export_filename(Utc::now()));
    export_to_file(results, &path)?;
    Ok(path)
}

/// Write results to an explicit path
pub fn export_to_file<P: AsRef<Path>>(results: &[AnalysisResult], path: P) -> Result<()> {
    if results.is_empty() {
        return Err(DashboardError::NoData);
    }

    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_csv(results, std::io::BufWriter::new(file))?;
    info!("Exported {} results to {}", results.len(), path.display());
    Ok(())
}
