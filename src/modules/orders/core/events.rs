use crate::modules::orders::core::state::OrderDetails;
use chrono::{DateTime, NaiveDateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum OrderEvent {
    OrderCreatedV1 {
        order_id: String,
        details: OrderDetails,
        assigned_to: Option<String>,
        created_by: String,
        created_at: DateTime<Utc>,
    },
    OrderAssignedV1 {
        order_id: String,
        user_id: String,
    },
    OrderRescheduledV1 {
        order_id: String,
        planned_start: Option<NaiveDateTime>,
        planned_end: Option<NaiveDateTime>,
    },
    OrderStartedV1 {
        order_id: String,
        by: String,
        at: NaiveDateTime,
    },
    OrderCompletedV1 {
        order_id: String,
        by: String,
        at: NaiveDateTime,
        note: Option<String>,
    },
    OrderCancelledV1 {
        order_id: String,
        reason: Option<String>,
        at: NaiveDateTime,
    },
}
