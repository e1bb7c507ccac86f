use crate::modules::orders::core::events::OrderEvent;
use crate::modules::orders::core::state::{Order, OrderState, OrderStatus};

pub fn evolve(mut state: OrderState, event: &OrderEvent) -> OrderState {
    if let OrderEvent::OrderCreatedV1 {
        order_id,
        details,
        assigned_to,
        created_by,
        created_at,
    } = event
    {
        state.order = Some(Order {
            id: order_id.clone(),
            details: details.clone(),
            status: OrderStatus::Open,
            assigned_to: assigned_to.clone(),
            created_by: created_by.clone(),
            created_at: *created_at,
            started_at: None,
            completed_at: None,
            completion_note: None,
            cancel_reason: None,
        });
        return state;
    }

    let Some(order) = state.order.as_mut() else {
        return state;
    };
    match event {
        OrderEvent::OrderCreatedV1 { .. } => {}
        OrderEvent::OrderAssignedV1 { user_id, .. } => {
            order.assigned_to = Some(user_id.clone());
        }
        OrderEvent::OrderRescheduledV1 {
            planned_start,
            planned_end,
            ..
        } => {
            order.details.planned_start = *planned_start;
            order.details.planned_end = *planned_end;
        }
        OrderEvent::OrderStartedV1 { at, .. } => {
            order.status = OrderStatus::InProgress;
            order.started_at = Some(*at);
        }
        OrderEvent::OrderCompletedV1 { at, note, .. } => {
            order.status = OrderStatus::Completed;
            order.completed_at = Some(*at);
            order.completion_note = note.clone();
        }
        OrderEvent::OrderCancelledV1 { reason, .. } => {
            order.status = OrderStatus::Cancelled;
            order.cancel_reason = reason.clone();
        }
    }
    state
}
