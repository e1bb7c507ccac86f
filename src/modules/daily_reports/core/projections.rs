use crate::modules::daily_reports::core::state::DailyReport;
use crate::shared::core::approval::ApprovalStatus;
use crate::shared::infrastructure::read_model::Keyed;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReportView {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub hours: Decimal,
    pub materials: Option<String>,
    pub order_id: Option<String>,
    pub emergency: bool,
    pub status: ApprovalStatus,
    pub submitted_at: DateTime<Utc>,
    pub corrected_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub review_comment: Option<String>,
}

impl Keyed for DailyReportView {
    fn key(&self) -> &str {
        &self.id
    }
}

impl From<&DailyReport> for DailyReportView {
    fn from(report: &DailyReport) -> Self {
        let record = report.approval.as_ref();
        Self {
            id: report.id.clone(),
            user_id: report.user_id.clone(),
            date: report.draft.date,
            description: report.draft.description.clone(),
            hours: report.draft.hours,
            materials: report.draft.materials.clone(),
            order_id: report.draft.order_id.clone(),
            emergency: report.draft.emergency,
            status: report.status(),
            submitted_at: report.submitted_at,
            corrected_at: report.corrected_at,
            approved_by: record.map(|r| r.decided_by.clone()),
            approved_at: record.map(|r| r.decided_at),
            review_comment: record.and_then(|r| r.comment.clone()),
        }
    }
}
