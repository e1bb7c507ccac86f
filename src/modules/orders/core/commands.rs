use crate::modules::orders::core::state::OrderDetails;
use chrono::{DateTime, NaiveDateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    Create {
        order_id: String,
        details: OrderDetails,
        assigned_to: Option<String>,
        created_by: String,
        at: DateTime<Utc>,
    },
    Assign {
        user_id: String,
    },
    Reschedule {
        planned_start: Option<NaiveDateTime>,
        planned_end: Option<NaiveDateTime>,
    },
    Start {
        by: String,
        at: NaiveDateTime,
    },
    Complete {
        by: String,
        at: NaiveDateTime,
        note: Option<String>,
    },
    Cancel {
        reason: Option<String>,
        at: NaiveDateTime,
    },
}
