use chrono::NaiveDate;
use serde::Serialize;

use glasssuite_core::{CellValue, EntityKind, FieldDef, entity_fields, report_run_fields};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Processing,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Pool order is normative for picks.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Open,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Workspace user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserRole {
    Admin,
    Analyst,
    Operator,
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Analyst,
        UserRole::Operator,
        UserRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Analyst => "Analyst",
            UserRole::Operator => "Operator",
            UserRole::Viewer => "Viewer",
        }
    }
}

/// Outcome of a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Running,
    Failed,
}

impl RunStatus {
    pub const ALL: [RunStatus; 3] = [RunStatus::Success, RunStatus::Running, RunStatus::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "success",
            RunStatus::Running => "running",
            RunStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub country: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total: f64,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub id: i64,
    pub order_id: i64,
    pub amount: f64,
    pub paid: bool,
    pub issued_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: NaiveDate,
}

/// Run-history record keyed by a report id (or the "all" sentinel).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRunRow {
    pub id: String,
    pub report: String,
    pub owner: String,
    pub status: RunStatus,
    pub updated: NaiveDate,
    pub duration_ms: i64,
}

/// One generated record of any shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Customer(CustomerRow),
    Order(OrderRow),
    Invoice(InvoiceRow),
    User(UserRow),
    ReportRun(ReportRunRow),
}

impl Row {
    /// Project the record into cells, in its field-list order.
    pub fn cells(&self) -> Vec<CellValue> {
        match self {
            Row::Customer(row) => vec![
                CellValue::Int(row.id),
                CellValue::Text(row.name.clone()),
                CellValue::Text(row.email.clone()),
                CellValue::Text(row.country.clone()),
                CellValue::Date(row.created_at),
            ],
            Row::Order(row) => vec![
                CellValue::Int(row.id),
                CellValue::Int(row.customer_id),
                CellValue::Text(row.status.as_str().to_string()),
                CellValue::Float(row.total),
                CellValue::Date(row.created_at),
            ],
            Row::Invoice(row) => vec![
                CellValue::Int(row.id),
                CellValue::Int(row.order_id),
                CellValue::Float(row.amount),
                CellValue::Bool(row.paid),
                CellValue::Date(row.issued_at),
            ],
            Row::User(row) => vec![
                CellValue::Int(row.id),
                CellValue::Text(row.name.clone()),
                CellValue::Text(row.role.as_str().to_string()),
                CellValue::Bool(row.active),
                CellValue::Date(row.created_at),
            ],
            Row::ReportRun(row) => vec![
                CellValue::Text(row.id.clone()),
                CellValue::Text(row.report.clone()),
                CellValue::Text(row.owner.clone()),
                CellValue::Text(row.status.as_str().to_string()),
                CellValue::Date(row.updated),
                CellValue::Int(row.duration_ms),
            ],
        }
    }
}

/// What to synthesize: an entity's rows, or run history for a report key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Entity(EntityKind),
    ReportRun { report: String },
}

impl RowKind {
    /// Column descriptors for this kind, shared with the grid engines.
    pub fn fields(&self) -> &'static [FieldDef] {
        match self {
            RowKind::Entity(entity) => entity_fields(*entity),
            RowKind::ReportRun { .. } => report_run_fields(),
        }
    }

    /// Short name for logs and CLI output.
    pub fn label(&self) -> &str {
        match self {
            RowKind::Entity(entity) => entity.label(),
            RowKind::ReportRun { .. } => "report-run",
        }
    }

    /// Seed used when the caller does not supply one: the entity label,
    /// or the report key for run history.
    pub fn default_seed(&self) -> &str {
        match self {
            RowKind::Entity(entity) => entity.label(),
            RowKind::ReportRun { report } => report.as_str(),
        }
    }
}
