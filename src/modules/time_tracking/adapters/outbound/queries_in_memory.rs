use crate::modules::time_tracking::core::projections::TimeEntryView;
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::{
    TimeEntryFilter, TimeEntryQueries,
};
use crate::shared::infrastructure::read_model::in_memory::InMemoryReadModel;
use async_trait::async_trait;

#[async_trait]
impl TimeEntryQueries for InMemoryReadModel<TimeEntryView> {
    async fn find(&self, entry_id: &str) -> anyhow::Result<Option<TimeEntryView>> {
        InMemoryReadModel::find(self, entry_id).await
    }

    async fn list(&self, filter: &TimeEntryFilter) -> anyhow::Result<Vec<TimeEntryView>> {
        let mut rows = self.filter(|view| filter.matches(view)).await?;
        rows.sort_by(|a, b| {
            b.clock_in.cmp(&a.clock_in).then_with(|| a.id.cmp(&b.id))
        });
        Ok(rows)
    }
}
