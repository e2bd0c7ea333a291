use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed set of queryable entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EntityKind {
    Customers,
    Orders,
    Invoices,
    Users,
}

impl EntityKind {
    /// All entities, in catalog order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Customers,
        EntityKind::Orders,
        EntityKind::Invoices,
        EntityKind::Users,
    ];

    /// Display label, identical to the serialized name.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Customers => "Customers",
            EntityKind::Orders => "Orders",
            EntityKind::Invoices => "Invoices",
            EntityKind::Users => "Users",
        }
    }

    /// Lowercased table name used in rendered SQL.
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Customers => "customers",
            EntityKind::Orders => "orders",
            EntityKind::Invoices => "invoices",
            EntityKind::Users => "users",
        }
    }

    /// Ordered field list for this entity.
    pub fn fields(&self) -> &'static [FieldDef] {
        entity_fields(*self)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "customers" => Ok(EntityKind::Customers),
            "orders" => Ok(EntityKind::Orders),
            "invoices" => Ok(EntityKind::Invoices),
            "users" => Ok(EntityKind::Users),
            _ => Err(Error::UnknownEntity(value.to_string())),
        }
    }
}

/// Semantic type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Date,
    Boolean,
}

/// Static metadata for a single entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct FieldDef {
    /// Stable identifier used in clauses and rendered SQL.
    pub id: &'static str,
    /// Display label for column headers.
    pub label: &'static str,
    /// Semantic type driving grid alignment and sorting.
    pub kind: FieldType,
}

pub(crate) const fn field(id: &'static str, label: &'static str, kind: FieldType) -> FieldDef {
    FieldDef { id, label, kind }
}

const CUSTOMER_FIELDS: &[FieldDef] = &[
    field("id", "ID", FieldType::Number),
    field("name", "Name", FieldType::String),
    field("email", "Email", FieldType::String),
    field("country", "Country", FieldType::String),
    field("created_at", "Created", FieldType::Date),
];

const ORDER_FIELDS: &[FieldDef] = &[
    field("id", "ID", FieldType::Number),
    field("customer_id", "Customer ID", FieldType::Number),
    field("status", "Status", FieldType::String),
    field("total", "Total", FieldType::Number),
    field("created_at", "Created", FieldType::Date),
];

const INVOICE_FIELDS: &[FieldDef] = &[
    field("id", "ID", FieldType::Number),
    field("order_id", "Order ID", FieldType::Number),
    field("amount", "Amount", FieldType::Number),
    field("paid", "Paid", FieldType::Boolean),
    field("issued_at", "Issued", FieldType::Date),
];

const USER_FIELDS: &[FieldDef] = &[
    field("id", "ID", FieldType::Number),
    field("name", "Name", FieldType::String),
    field("role", "Role", FieldType::String),
    field("active", "Active", FieldType::Boolean),
    field("created_at", "Created", FieldType::Date),
];

/// Ordered field list for an entity. Total over the closed set.
pub fn entity_fields(kind: EntityKind) -> &'static [FieldDef] {
    match kind {
        EntityKind::Customers => CUSTOMER_FIELDS,
        EntityKind::Orders => ORDER_FIELDS,
        EntityKind::Invoices => INVOICE_FIELDS,
        EntityKind::Users => USER_FIELDS,
    }
}

/// Look up a field by identifier within an entity's field list.
pub fn lookup_field(kind: EntityKind, field_id: &str) -> Option<&'static FieldDef> {
    entity_fields(kind).iter().find(|f| f.id == field_id)
}
