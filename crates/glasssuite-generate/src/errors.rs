use thiserror::Error;

/// Errors emitted while writing generated rows.
///
/// Generation itself is total: any (kind, count, seed) produces exactly
/// `count` rows without failing. Only the output writers touch fallible
/// resources.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generation output operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
