use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

use crate::entity::{FieldDef, FieldType, field};

/// Category of a built-in report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum ReportCategory {
    Finance,
    Security,
    Usage,
}

impl ReportCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Finance => "Finance",
            ReportCategory::Security => "Security",
            ReportCategory::Usage => "Usage",
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Built-in report catalog entry. Fixed at startup, not user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Report {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Display string ("2 days ago"), not a timestamp.
    pub updated: &'static str,
    pub category: ReportCategory,
}

/// Seed key for run-history rows when no specific report is selected.
pub const ALL_REPORTS_KEY: &str = "all";

const REPORTS: &[Report] = &[
    Report {
        id: "r1",
        title: "Monthly Spend Overview",
        description: "Org-level spend grouped by cost center and environment.",
        updated: "2 days ago",
        category: ReportCategory::Finance,
    },
    Report {
        id: "r2",
        title: "SSO & MFA Adoption",
        description: "Track authentication rollout and enforcement over time.",
        updated: "6 hours ago",
        category: ReportCategory::Security,
    },
    Report {
        id: "r3",
        title: "API Usage by Module",
        description: "Requests, errors, and latency p95 across product modules.",
        updated: "1 day ago",
        category: ReportCategory::Usage,
    },
    Report {
        id: "r4",
        title: "Audit Log Exports",
        description: "Exports and downloads with actor and scope.",
        updated: "3 hours ago",
        category: ReportCategory::Security,
    },
];

const REPORT_RUN_FIELDS: &[FieldDef] = &[
    field("id", "Run ID", FieldType::String),
    field("report", "Report", FieldType::String),
    field("owner", "Owner", FieldType::String),
    field("status", "Status", FieldType::String),
    field("updated", "Updated", FieldType::Date),
    field("duration_ms", "Duration (ms)", FieldType::Number),
];

/// The built-in report catalog, in display order.
pub fn builtin_reports() -> &'static [Report] {
    REPORTS
}

/// Look up a report by identifier.
pub fn find_report(id: &str) -> Option<&'static Report> {
    REPORTS.iter().find(|r| r.id == id)
}

/// Ordered field list for synthesized run-history rows.
pub fn report_run_fields() -> &'static [FieldDef] {
    REPORT_RUN_FIELDS
}
