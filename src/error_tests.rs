//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::DashboardError;

    #[test]
    fn test_api_error() {
        let err = DashboardError::Api("500 Internal Server Error".to_string());
        assert!(err.to_string().contains("API error"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_config_error() {
        let err = DashboardError::Config("Missing base URL".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_validation_error() {
        let err = DashboardError::Validation("Minimum 3 datasets are required for training".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Validation error"));
        assert!(msg.contains("Minimum 3 datasets"));
    }

    #[test]
    fn test_rate_limited() {
        let err = DashboardError::RateLimited("Rate limit exceeded".to_string());
        assert!(err.to_string().contains("Rate limited"));
    }

    #[test]
    fn test_no_data() {
        let err = DashboardError::NoData;
        assert_eq!(err.to_string(), "No analysis data available");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: DashboardError = parse.unwrap_err().into();
        assert!(matches!(err, DashboardError::Json(_)));
        assert!(err.to_string().contains("JSON parsing error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "results.json");
        let err: DashboardError = io.into();
        assert!(matches!(err, DashboardError::Io(_)));
        assert!(err.to_string().contains("results.json"));
    }

    #[test]
    fn test_error_is_debug() {
        let err = DashboardError::Internal("test".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Internal"));
    }

    #[test]
    fn test_error_variants_distinct() {
        let api = DashboardError::Api("test".to_string());
        let validation = DashboardError::Validation("test".to_string());

        assert_ne!(api.to_string(), validation.to_string());
    }
}
