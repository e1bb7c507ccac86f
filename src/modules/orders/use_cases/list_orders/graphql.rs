use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::orders::core::projections::OrderView;
use crate::modules::orders::use_cases::list_orders::queries_port::OrderFilter;
use crate::shared::core::access::Permission;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlOrder {
    pub id: String,
    pub order_type: String,
    pub title: String,
    pub description: Option<String>,
    pub customer_id: Option<String>,
    pub location: Option<String>,
    pub priority: String,
    pub status: String,
    pub assigned_to: Option<String>,
    pub planned_start: Option<String>,
    pub planned_end: Option<String>,
}

impl From<OrderView> for GqlOrder {
    fn from(v: OrderView) -> Self {
        Self {
            id: v.id,
            order_type: v.order_type.as_str().to_string(),
            title: v.title,
            description: v.description,
            customer_id: v.customer_id,
            location: v.location,
            priority: v.priority.as_str().to_string(),
            status: v.status.as_str().to_string(),
            assigned_to: v.assigned_to,
            planned_start: v.planned_start.map(|at| at.to_string()),
            planned_end: v.planned_end.map(|at| at.to_string()),
        }
    }
}

#[derive(Default)]
pub struct OrdersQuery;

#[Object]
impl OrdersQuery {
    /// Orders assigned to the signed-in user, by priority.
    async fn my_orders(
        &self,
        context: &Context<'_>,
        include_closed: Option<bool>,
    ) -> GqlResult<Vec<GqlOrder>> {
        let state = context.data_unchecked::<AppState>();
        let current = context.data::<CurrentUser>()?;
        let filter = OrderFilter {
            assigned_to: Some(current.id().to_string()),
            ..OrderFilter::default()
        };
        let include_closed = include_closed.unwrap_or(false);
        Ok(state
            .order_queries
            .list(&filter)
            .await?
            .into_iter()
            .filter(|order| include_closed || !order.status.is_closed())
            .map(Into::into)
            .collect())
    }

    /// One order, visible to the office and to its assignee.
    async fn order(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlOrder>> {
        let state = context.data_unchecked::<AppState>();
        let current = context.data::<CurrentUser>()?;
        let order = state.order_queries.find(&id).await?;
        let visible = |order: &OrderView| {
            current.role().can(Permission::ViewOrders)
                || order.assigned_to.as_deref() == Some(current.id())
        };
        Ok(order.filter(visible).map(Into::into))
    }
}
