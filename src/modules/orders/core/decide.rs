use crate::modules::orders::core::commands::OrderCommand;
use crate::modules::orders::core::events::OrderEvent;
use crate::modules::orders::core::state::{
    Order, OrderDetails, OrderState, OrderStatus, OrderType, Priority,
};
use crate::shared::core::decider::{Rejection, RejectionKind};
use chrono::NaiveDateTime;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("order {0} already exists")]
    AlreadyExists(String),

    #[error("order not found")]
    NotFound,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("planned start {start} is after planned end {end}")]
    InvalidSchedule {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("cannot {action} an order that is {from}")]
    InvalidTransition {
        from: OrderStatus,
        action: &'static str,
    },

    #[error("order is not assigned to {0}")]
    NotAssignee(String),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::AlreadyExists(_) | DecideError::InvalidTransition { .. } => {
                RejectionKind::Conflict
            }
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::EmptyTitle | DecideError::InvalidSchedule { .. } => RejectionKind::Invalid,
            DecideError::NotAssignee(_) => RejectionKind::Forbidden,
        }
    }
}

/// Emergency orders keep at least high priority, whatever was entered.
pub fn normalize(mut details: OrderDetails) -> OrderDetails {
    details.title = details.title.trim().to_string();
    if details.order_type == OrderType::Emergency {
        details.priority = details.priority.max(Priority::High);
    }
    details
}

pub fn decide(state: &OrderState, command: OrderCommand) -> Result<Vec<OrderEvent>, DecideError> {
    match command {
        OrderCommand::Create {
            order_id,
            details,
            assigned_to,
            created_by,
            at,
        } => {
            if state.order.is_some() {
                return Err(DecideError::AlreadyExists(order_id));
            }
            let details = normalize(details);
            if details.title.is_empty() {
                return Err(DecideError::EmptyTitle);
            }
            validate_schedule(details.planned_start, details.planned_end)?;
            Ok(vec![OrderEvent::OrderCreatedV1 {
                order_id,
                details,
                assigned_to,
                created_by,
                created_at: at,
            }])
        }

        OrderCommand::Assign { user_id } => {
            let order = existing(state)?;
            if order.status.is_closed() {
                return Err(DecideError::InvalidTransition {
                    from: order.status,
                    action: "assign",
                });
            }
            Ok(vec![OrderEvent::OrderAssignedV1 {
                order_id: order.id.clone(),
                user_id,
            }])
        }

        OrderCommand::Reschedule {
            planned_start,
            planned_end,
        } => {
            let order = existing(state)?;
            if order.status.is_closed() {
                return Err(DecideError::InvalidTransition {
                    from: order.status,
                    action: "reschedule",
                });
            }
            validate_schedule(planned_start, planned_end)?;
            Ok(vec![OrderEvent::OrderRescheduledV1 {
                order_id: order.id.clone(),
                planned_start,
                planned_end,
            }])
        }

        OrderCommand::Start { by, at } => {
            let order = existing(state)?;
            ensure_assignee(order, &by)?;
            if order.status != OrderStatus::Open {
                return Err(DecideError::InvalidTransition {
                    from: order.status,
                    action: "start",
                });
            }
            Ok(vec![OrderEvent::OrderStartedV1 {
                order_id: order.id.clone(),
                by,
                at,
            }])
        }

        OrderCommand::Complete { by, at, note } => {
            let order = existing(state)?;
            ensure_assignee(order, &by)?;
            if order.status != OrderStatus::InProgress {
                return Err(DecideError::InvalidTransition {
                    from: order.status,
                    action: "complete",
                });
            }
            Ok(vec![OrderEvent::OrderCompletedV1 {
                order_id: order.id.clone(),
                by,
                at,
                note,
            }])
        }

        OrderCommand::Cancel { reason, at } => {
            let order = existing(state)?;
            if order.status.is_closed() {
                return Err(DecideError::InvalidTransition {
                    from: order.status,
                    action: "cancel",
                });
            }
            Ok(vec![OrderEvent::OrderCancelledV1 {
                order_id: order.id.clone(),
                reason,
                at,
            }])
        }
    }
}

fn existing(state: &OrderState) -> Result<&Order, DecideError> {
    state.order.as_ref().ok_or(DecideError::NotFound)
}

fn ensure_assignee(order: &Order, user_id: &str) -> Result<(), DecideError> {
    if order.assigned_to.as_deref() != Some(user_id) {
        return Err(DecideError::NotAssignee(user_id.to_string()));
    }
    Ok(())
}

fn validate_schedule(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<(), DecideError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(DecideError::InvalidSchedule { start, end }),
        _ => Ok(()),
    }
}
