use crate::modules::orders::core::projections::OrderView;
use crate::modules::orders::core::state::OrderStatus;
use async_trait::async_trait;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub assigned_to: Option<String>,
    pub status: Option<OrderStatus>,
    pub emergencies_only: bool,
}

impl OrderFilter {
    pub fn matches(&self, view: &OrderView) -> bool {
        self.assigned_to
            .as_ref()
            .is_none_or(|u| view.assigned_to.as_ref() == Some(u))
            && self.status.is_none_or(|s| s == view.status)
            && (!self.emergencies_only || view.is_emergency())
    }
}

#[async_trait]
pub trait OrderQueries: Send + Sync {
    async fn find(&self, order_id: &str) -> anyhow::Result<Option<OrderView>>;

    /// Orders matching `filter`: highest priority first, then by planned start.
    async fn list(&self, filter: &OrderFilter) -> anyhow::Result<Vec<OrderView>>;
}
