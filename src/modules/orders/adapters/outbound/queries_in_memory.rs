use crate::modules::orders::core::projections::OrderView;
use crate::modules::orders::use_cases::list_orders::queries_port::{OrderFilter, OrderQueries};
use crate::shared::infrastructure::read_model::in_memory::InMemoryReadModel;
use async_trait::async_trait;
use std::cmp::Reverse;

#[async_trait]
impl OrderQueries for InMemoryReadModel<OrderView> {
    async fn find(&self, order_id: &str) -> anyhow::Result<Option<OrderView>> {
        InMemoryReadModel::find(self, order_id).await
    }

    async fn list(&self, filter: &OrderFilter) -> anyhow::Result<Vec<OrderView>> {
        let mut rows = self.filter(|view| filter.matches(view)).await?;
        // Unscheduled orders sort last within a priority.
        rows.sort_by_key(|v| {
            (
                Reverse(v.priority),
                v.planned_start.is_none(),
                v.planned_start,
                v.created_at,
            )
        });
        Ok(rows)
    }
}
