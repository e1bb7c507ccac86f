use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::shared::core::approval::ApprovalStatus;
use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReportFilter {
    pub user_id: Option<String>,
    pub status: Option<ApprovalStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DailyReportFilter {
    pub fn matches(&self, view: &DailyReportView) -> bool {
        self.user_id.as_ref().is_none_or(|u| *u == view.user_id)
            && self.status.is_none_or(|s| s == view.status)
            && self.from.is_none_or(|from| view.date >= from)
            && self.to.is_none_or(|to| view.date <= to)
    }
}

#[async_trait]
pub trait DailyReportQueries: Send + Sync {
    async fn find(&self, report_id: &str) -> anyhow::Result<Option<DailyReportView>>;

    /// Matching reports, latest date first.
    async fn list(&self, filter: &DailyReportFilter) -> anyhow::Result<Vec<DailyReportView>>;
}
