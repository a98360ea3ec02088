//! Error types shared across NearGuard crates.

/// Top-level error type for NearGuard operations.
#[derive(Debug, thiserror::Error)]
pub enum NearguardError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using NearguardError.
pub type NearguardResult<T> = Result<T, NearguardError>;

impl NearguardError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
