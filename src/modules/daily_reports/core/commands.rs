use crate::modules::daily_reports::core::state::ReportDraft;
use crate::shared::core::approval::Review;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyReportCommand {
    Submit {
        report_id: String,
        user_id: String,
        draft: ReportDraft,
        at: DateTime<Utc>,
        today: NaiveDate,
    },
    Correct {
        by: String,
        draft: ReportDraft,
        at: DateTime<Utc>,
        today: NaiveDate,
    },
    Review {
        review: Review,
        today: NaiveDate,
    },
}
