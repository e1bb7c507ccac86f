use crate::modules::orders::core::state::{Order, OrderStatus, OrderType, Priority};
use crate::shared::infrastructure::read_model::Keyed;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: String,
    pub order_type: OrderType,
    pub title: String,
    pub description: Option<String>,
    pub customer_id: Option<String>,
    pub location: Option<String>,
    pub priority: Priority,
    pub status: OrderStatus,
    pub assigned_to: Option<String>,
    pub planned_start: Option<NaiveDateTime>,
    pub planned_end: Option<NaiveDateTime>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub completion_note: Option<String>,
    pub cancel_reason: Option<String>,
}

impl OrderView {
    pub fn is_emergency(&self) -> bool {
        self.order_type == OrderType::Emergency
    }
}

impl Keyed for OrderView {
    fn key(&self) -> &str {
        &self.id
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let details = &order.details;
        Self {
            id: order.id.clone(),
            order_type: details.order_type,
            title: details.title.clone(),
            description: details.description.clone(),
            customer_id: details.customer_id.clone(),
            location: details.location.clone(),
            priority: details.priority,
            status: order.status,
            assigned_to: order.assigned_to.clone(),
            planned_start: details.planned_start,
            planned_end: details.planned_end,
            created_by: order.created_by.clone(),
            created_at: order.created_at,
            started_at: order.started_at,
            completed_at: order.completed_at,
            completion_note: order.completion_note.clone(),
            cancel_reason: order.cancel_reason.clone(),
        }
    }
}
