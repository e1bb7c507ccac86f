use crate::shared::core::approval::{ApprovalRecord, ApprovalStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the employee writes down for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub date: NaiveDate,
    pub description: String,
    pub hours: Decimal,
    pub materials: Option<String>,
    pub order_id: Option<String>,
    /// Notdienst.
    pub emergency: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub id: String,
    pub user_id: String,
    pub draft: ReportDraft,
    pub submitted_at: DateTime<Utc>,
    pub corrected_at: Option<DateTime<Utc>>,
    pub approval: Option<ApprovalRecord>,
}

impl DailyReport {
    pub fn status(&self) -> ApprovalStatus {
        self.approval
            .as_ref()
            .map(|record| record.status)
            .unwrap_or(ApprovalStatus::Pending)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReportState {
    pub report: Option<DailyReport>,
}
