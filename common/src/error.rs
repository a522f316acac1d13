//! Error types shared across the dashboard.

use thiserror::Error;

/// Common error type.
///
/// `AnalysisFailed` carries the backend's own message verbatim so the
/// dashboard can display it unchanged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("analysis service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    AnalysisFailed(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("stored history is unreadable: {0}")]
    StorageCorrupt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_failed_displays_message_verbatim() {
        let error = Error::AnalysisFailed("model unavailable".to_string());
        assert_eq!(format!("{}", error), "model unavailable");
    }

    #[test]
    fn test_service_unavailable_display() {
        let error = Error::ServiceUnavailable("status 503".to_string());
        let display = format!("{}", error);
        assert!(display.contains("unavailable"));
        assert!(display.contains("status 503"));
    }

    #[test]
    fn test_not_implemented_display() {
        let error = Error::NotImplemented("batch analysis");
        assert_eq!(format!("{}", error), "batch analysis is not implemented");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_storage_corrupt_display() {
        let error = Error::StorageCorrupt("unexpected end of input".to_string());
        assert!(format!("{}", error).contains("unreadable"));
    }
}
