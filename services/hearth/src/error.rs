//! Error types for the hearth service

/// Errors that can occur in the hearth service
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bill not found: {0}")]
    BillNotFound(String),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for hearth operations
pub type Result<T> = std::result::Result<T, HearthError>;
