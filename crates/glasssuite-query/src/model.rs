use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use glasssuite_core::EntityKind;

use crate::errors::QueryError;

/// Comparison operator available in the clause editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClauseOp {
    Equals,
    Contains,
    GreaterThan,
    LessThan,
}

impl ClauseOp {
    /// All operators, in editor order.
    pub const ALL: [ClauseOp; 4] = [
        ClauseOp::Equals,
        ClauseOp::Contains,
        ClauseOp::GreaterThan,
        ClauseOp::LessThan,
    ];

    /// Canonical token, identical to the serialized form.
    pub fn token(&self) -> &'static str {
        match self {
            ClauseOp::Equals => "equals",
            ClauseOp::Contains => "contains",
            ClauseOp::GreaterThan => "greater-than",
            ClauseOp::LessThan => "less-than",
        }
    }
}

impl fmt::Display for ClauseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ClauseOp {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "equals" => Ok(ClauseOp::Equals),
            "contains" => Ok(ClauseOp::Contains),
            "greater-than" => Ok(ClauseOp::GreaterThan),
            "less-than" => Ok(ClauseOp::LessThan),
            _ => Err(QueryError::UnknownOperator(value.to_string())),
        }
    }
}

/// Single conjunctive filter clause as edited in the builder.
///
/// Clause lists preserve order and allow duplicate fields; the conjunction
/// is AND-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Clause {
    pub field_id: String,
    pub op: ClauseOp,
    pub value: String,
}

impl Clause {
    pub fn new(field_id: impl Into<String>, op: ClauseOp, value: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            op,
            value: value.into(),
        }
    }

    /// Inert clauses render nothing. Inertness depends only on the trimmed
    /// value, never on field or operator.
    pub fn is_inert(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// One active clause inside a filter description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WhereEntry {
    pub field: String,
    pub op: ClauseOp,
    pub value: String,
}

/// Structured filter description rendered next to the SQL preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FilterDescriptor {
    pub entity: EntityKind,
    #[serde(rename = "where")]
    pub where_clauses: Vec<WhereEntry>,
}

impl FilterDescriptor {
    /// Pretty JSON for the preview pane.
    pub fn to_pretty_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Saved query snapshot kept in the capped log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SavedQuery {
    pub id: String,
    pub name: String,
    pub entity: EntityKind,
    pub clauses: Vec<Clause>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}
