use crate::modules::orders::core::projections::OrderView;
use crate::modules::orders::core::state::{OrderDetails, OrderStatus, OrderType, Priority};
use crate::tests::fixtures::time::utc;
use chrono::NaiveDateTime;

pub struct OrderDetailsBuilder {
    details: OrderDetails,
}

impl OrderDetailsBuilder {
    pub fn new() -> Self {
        Self {
            details: OrderDetails {
                order_type: OrderType::Maintenance,
                title: "Jahreswartung Aufzug A".into(),
                description: None,
                customer_id: None,
                location: Some("Hafenstrasse 12, Hamburg".into()),
                priority: Priority::Normal,
                planned_start: None,
                planned_end: None,
            },
        }
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.details.order_type = order_type;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.details.priority = priority;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.details.title = title.into();
        self
    }

    pub fn planned(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.details.planned_start = Some(start);
        self.details.planned_end = Some(end);
        self
    }

    pub fn build(self) -> OrderDetails {
        self.details
    }
}

/// An open, unassigned, unplanned maintenance order.
pub struct OrderViewBuilder {
    view: OrderView,
}

impl OrderViewBuilder {
    pub fn new() -> Self {
        Self {
            view: OrderView {
                id: "ord-0001".into(),
                order_type: OrderType::Maintenance,
                title: "Jahreswartung Aufzug A".into(),
                description: None,
                customer_id: None,
                location: None,
                priority: Priority::Normal,
                status: OrderStatus::Open,
                assigned_to: None,
                planned_start: None,
                planned_end: None,
                created_by: "buero-0001".into(),
                created_at: utc("2026-10-14 07:00"),
                started_at: None,
                completed_at: None,
                completion_note: None,
                cancel_reason: None,
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.view.id = id.into();
        self
    }

    pub fn planned_start(mut self, at: NaiveDateTime) -> Self {
        self.view.planned_start = Some(at);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.view.priority = priority;
        self
    }

    pub fn assigned_to(mut self, user_id: impl Into<String>) -> Self {
        self.view.assigned_to = Some(user_id.into());
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.view.status = status;
        self
    }

    pub fn build(self) -> OrderView {
        self.view
    }
}
