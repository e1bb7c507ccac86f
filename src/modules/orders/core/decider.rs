use crate::modules::orders::core::commands::OrderCommand;
use crate::modules::orders::core::decide::{DecideError, decide};
use crate::modules::orders::core::events::OrderEvent;
use crate::modules::orders::core::evolve::evolve;
use crate::modules::orders::core::projections::OrderView;
use crate::modules::orders::core::state::OrderState;
use crate::shared::core::decider::{Decider, Mutation, Projection};

pub fn stream_id(order_id: &str) -> String {
    format!("Order-{order_id}")
}

pub struct Orders;

impl Decider for Orders {
    type State = OrderState;
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DecideError;

    fn decide(
        &self,
        state: &OrderState,
        command: OrderCommand,
    ) -> Result<Vec<OrderEvent>, DecideError> {
        decide(state, command)
    }

    fn evolve(&self, state: OrderState, event: &OrderEvent) -> OrderState {
        evolve(state, event)
    }
}

impl Projection for Orders {
    type Row = OrderView;

    fn project(&self, state: &OrderState, _event: &OrderEvent) -> Vec<Mutation<OrderView>> {
        state
            .order
            .as_ref()
            .map(|order| Mutation::Upsert(OrderView::from(order)))
            .into_iter()
            .collect()
    }
}
