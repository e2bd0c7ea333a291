use thiserror::Error;

/// Core error type shared across GlassSuite crates.
#[derive(Debug, Error)]
pub enum Error {
    /// An entity name outside the closed catalog.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
    /// A field identifier not present in the entity's field list.
    #[error("unknown field `{field}` for entity {entity}")]
    UnknownField { entity: String, field: String },
    /// A report identifier outside the built-in catalog.
    #[error("unknown report: {0}")]
    UnknownReport(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by GlassSuite crates.
pub type Result<T> = std::result::Result<T, Error>;
