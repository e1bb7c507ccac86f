use crate::modules::absences::core::commands::AbsenceCommand;
use crate::modules::absences::core::decide::{DecideError, decide};
use crate::modules::absences::core::events::AbsenceEvent;
use crate::modules::absences::core::evolve::evolve;
use crate::modules::absences::core::projections::AbsenceView;
use crate::modules::absences::core::state::AbsenceState;
use crate::shared::core::decider::{Decider, Mutation, Projection};

/// One stream per employee, so the overlap check sees every request.
pub fn stream_id(user_id: &str) -> String {
    format!("Absences-{user_id}")
}

pub struct Absences;

impl Decider for Absences {
    type State = AbsenceState;
    type Command = AbsenceCommand;
    type Event = AbsenceEvent;
    type Error = DecideError;

    fn decide(
        &self,
        state: &AbsenceState,
        command: AbsenceCommand,
    ) -> Result<Vec<AbsenceEvent>, DecideError> {
        decide(state, command)
    }

    fn evolve(&self, state: AbsenceState, event: &AbsenceEvent) -> AbsenceState {
        evolve(state, event)
    }
}

impl Projection for Absences {
    type Row = AbsenceView;

    fn project(&self, state: &AbsenceState, event: &AbsenceEvent) -> Vec<Mutation<AbsenceView>> {
        let absence_id = event.absence_id();
        match state.live(absence_id) {
            Some(absence) => vec![Mutation::Upsert(AbsenceView::from(absence))],
            None => vec![Mutation::Remove(absence_id.to_string())],
        }
    }
}
