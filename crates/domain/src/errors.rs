use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Container runtime unavailable at {endpoint}: {reason}")]
    RuntimeUnavailable { endpoint: String, reason: String },

    #[error("Container runtime did not answer within {timeout_ms}ms")]
    RuntimeTimeout { timeout_ms: u64 },

    #[error("Invalid container runtime response: {0}")]
    RuntimeResponse(String),

    #[error("Invalid record name: {0}")]
    InvalidRecordName(String),
}
