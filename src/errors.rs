use axum::http::StatusCode;
use thiserror::Error;

/// The payload arrived but could not be turned into a dataset.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProcessingError {
    #[error("payload contains no rows")]
    EmptyPayload,
    #[error("payload is not an array of row objects: {0}")]
    Decode(String),
    #[error("row {row} has no column {column}")]
    MissingColumn { row: usize, column: usize },
    #[error("row {row} column {column} is not numeric: {value:?}")]
    NotNumeric {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("goal must be positive, got {0}")]
    NonPositiveGoal(f64),
}

/// Errors emitted by the aggregation pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError {
    #[error("source responded with status {0}")]
    Fetch(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl PipelineError {
    /// True when the source could not be retrieved at all.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Transport(_))
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
