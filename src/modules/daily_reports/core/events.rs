use crate::modules::daily_reports::core::state::ReportDraft;
use crate::shared::core::approval::ApprovalRecord;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DailyReportEvent {
    ReportSubmittedV1 {
        report_id: String,
        user_id: String,
        draft: ReportDraft,
        submitted_at: DateTime<Utc>,
    },
    ReportCorrectedV1 {
        report_id: String,
        draft: ReportDraft,
        corrected_at: DateTime<Utc>,
    },
    ReportReviewedV1 {
        report_id: String,
        record: ApprovalRecord,
    },
}
