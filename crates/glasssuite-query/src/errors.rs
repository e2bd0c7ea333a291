use thiserror::Error;

/// Errors raised while building query descriptors.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A clause references a field outside the entity's field list.
    #[error("unknown field `{field}` for entity {entity}")]
    UnknownField { entity: String, field: String },
    /// An operator token outside the closed set.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for query builder operations.
pub type Result<T> = std::result::Result<T, QueryError>;
