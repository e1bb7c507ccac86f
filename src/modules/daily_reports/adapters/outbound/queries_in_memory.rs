use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::daily_reports::use_cases::list_daily_reports::queries_port::{
    DailyReportFilter, DailyReportQueries,
};
use crate::shared::infrastructure::read_model::in_memory::InMemoryReadModel;
use async_trait::async_trait;

#[async_trait]
impl DailyReportQueries for InMemoryReadModel<DailyReportView> {
    async fn find(&self, report_id: &str) -> anyhow::Result<Option<DailyReportView>> {
        InMemoryReadModel::find(self, report_id).await
    }

    async fn list(&self, filter: &DailyReportFilter) -> anyhow::Result<Vec<DailyReportView>> {
        let mut rows = self.filter(|view| filter.matches(view)).await?;
        rows.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.submitted_at.cmp(&a.submitted_at))
        });
        Ok(rows)
    }
}
