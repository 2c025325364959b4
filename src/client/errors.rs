use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("[{operation}] returned status [{status}], expected [{expected}]")]
    UnexpectedStatus {
        operation: &'static str,
        expected: StatusCode,
        status: StatusCode
    },
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Created record came back without an id")]
    MissingId
}
