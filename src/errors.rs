use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

/// Startup failures while reading the price history. Fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Price source not found at {path:?}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema error: {0}")]
    Schema(String),
    #[error("Malformed date {value:?} on line {line}")]
    MalformedDate { line: u64, value: String },
}

impl From<csv::Error> for LoadError {
    fn from(value: csv::Error) -> Self {
        LoadError::Schema(value.to_string())
    }
}

/// Per-query failures. The canonical table is untouched when these occur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryError {
    #[error("Not enough data for this horizon: {rows} row(s), at least 2 required")]
    InsufficientData { rows: usize },
    #[error("Previous close is zero, percent change is undefined")]
    DivisionByZero,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Summary(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
        }
    }
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        AppError::Validation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("Unknown horizon: 2W".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_summary_errors_map_to_unprocessable() {
        let response = AppError::from(SummaryError::InsufficientData { rows: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = AppError::from(SummaryError::DivisionByZero).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_insufficient_data_message_names_row_count() {
        let msg = SummaryError::InsufficientData { rows: 0 }.to_string();
        assert!(msg.contains("0 row(s)"));
    }
}
