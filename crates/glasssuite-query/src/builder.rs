use glasssuite_core::{EntityKind, lookup_field};

use crate::errors::{QueryError, Result};
use crate::model::{Clause, ClauseOp, FilterDescriptor, WhereEntry};

/// Double every single quote before insertion into the SQL string.
fn escape_sql(value: &str) -> String {
    value.replace('\'', "''")
}

/// Reject clause lists referencing fields outside the entity's field list.
fn check_fields(entity: EntityKind, clauses: &[Clause]) -> Result<()> {
    for clause in clauses {
        if lookup_field(entity, &clause.field_id).is_none() {
            return Err(QueryError::UnknownField {
                entity: entity.label().to_string(),
                field: clause.field_id.clone(),
            });
        }
    }
    Ok(())
}

/// Render the display SQL for an entity and clause list.
///
/// Produces `SELECT * FROM <table>[ WHERE <conjunction>];` with the WHERE
/// keyword omitted entirely when every clause is inert. Active clauses
/// join with ` AND ` in input order.
pub fn render_sql(entity: EntityKind, clauses: &[Clause]) -> Result<String> {
    check_fields(entity, clauses)?;
    let table = entity.table_name();
    let conjunction = clauses
        .iter()
        .filter(|clause| !clause.is_inert())
        .map(|clause| {
            let value = escape_sql(clause.value.trim());
            let field = clause.field_id.as_str();
            match clause.op {
                ClauseOp::Contains => format!("{field} ILIKE '%{value}%'"),
                ClauseOp::Equals => format!("{field} = '{value}'"),
                ClauseOp::GreaterThan => format!("{field} > '{value}'"),
                ClauseOp::LessThan => format!("{field} < '{value}'"),
            }
        })
        .collect::<Vec<_>>()
        .join(" AND ");

    if conjunction.is_empty() {
        Ok(format!("SELECT * FROM {table};"))
    } else {
        Ok(format!("SELECT * FROM {table} WHERE {conjunction};"))
    }
}

/// Build the structured filter description for the JSON preview.
///
/// Same inertness rule as [`render_sql`]; values are trimmed but not
/// SQL-escaped, and clause order is preserved.
pub fn filter_descriptor(entity: EntityKind, clauses: &[Clause]) -> Result<FilterDescriptor> {
    check_fields(entity, clauses)?;
    let where_clauses = clauses
        .iter()
        .filter(|clause| !clause.is_inert())
        .map(|clause| WhereEntry {
            field: clause.field_id.clone(),
            op: clause.op,
            value: clause.value.trim().to_string(),
        })
        .collect();

    Ok(FilterDescriptor {
        entity,
        where_clauses,
    })
}
