use crate::modules::absences::core::projections::AbsenceView;
use crate::modules::absences::use_cases::list_absences::queries_port::{
    AbsenceFilter, AbsenceQueries,
};
use crate::shared::infrastructure::read_model::in_memory::InMemoryReadModel;
use async_trait::async_trait;

#[async_trait]
impl AbsenceQueries for InMemoryReadModel<AbsenceView> {
    async fn find(&self, absence_id: &str) -> anyhow::Result<Option<AbsenceView>> {
        InMemoryReadModel::find(self, absence_id).await
    }

    async fn list(&self, filter: &AbsenceFilter) -> anyhow::Result<Vec<AbsenceView>> {
        let mut rows = self.filter(|view| filter.matches(view)).await?;
        rows.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(rows)
    }
}
