use crate::modules::time_tracking::core::commands::TimeSheetCommand;
use crate::modules::time_tracking::core::decide::{DecideError, decide};
use crate::modules::time_tracking::core::duration::DurationCalculator;
use crate::modules::time_tracking::core::events::TimeSheetEvent;
use crate::modules::time_tracking::core::evolve::evolve;
use crate::modules::time_tracking::core::projections::{TimeEntryView, time_entry_view};
use crate::modules::time_tracking::core::state::TimeSheetState;
use crate::shared::core::decider::{Decider, Mutation, Projection};

/// One stream per employee, so the open-entry check sees every clock-in.
pub fn stream_id(user_id: &str) -> String {
    format!("TimeSheet-{user_id}")
}

pub struct TimeSheet {
    calculator: DurationCalculator,
}

impl TimeSheet {
    pub fn new(calculator: DurationCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &DurationCalculator {
        &self.calculator
    }
}

impl Decider for TimeSheet {
    type State = TimeSheetState;
    type Command = TimeSheetCommand;
    type Event = TimeSheetEvent;
    type Error = DecideError;

    fn decide(
        &self,
        state: &TimeSheetState,
        command: TimeSheetCommand,
    ) -> Result<Vec<TimeSheetEvent>, DecideError> {
        decide(state, command)
    }

    fn evolve(&self, state: TimeSheetState, event: &TimeSheetEvent) -> TimeSheetState {
        evolve(state, event)
    }
}

impl Projection for TimeSheet {
    type Row = TimeEntryView;

    fn project(
        &self,
        state: &TimeSheetState,
        event: &TimeSheetEvent,
    ) -> Vec<Mutation<TimeEntryView>> {
        let entry_id = event.entry_id();
        match state.entries.get(entry_id) {
            Some(entry) => vec![Mutation::Upsert(time_entry_view(entry, &self.calculator))],
            None => vec![Mutation::Remove(entry_id.to_string())],
        }
    }
}

#[cfg(test)]
mod time_sheet_projection_tests {
    use super::*;
    use crate::modules::time_tracking::core::state::EntryStatus;
    use crate::tests::fixtures::time::at;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn it_should_project_the_computed_hours_after_clock_out() {
        let decider = TimeSheet::new(DurationCalculator::new(510));
        let events = [
            TimeSheetEvent::ClockedInV1 {
                entry_id: "te-0001".into(),
                user_id: "user-0001".into(),
                at: at("2026-10-14 08:00"),
            },
            TimeSheetEvent::ClockedOutV1 {
                entry_id: "te-0001".into(),
                at: at("2026-10-14 17:00"),
            },
        ];
        let state = decider.fold(&events);
        let mutations = decider.project(&state, &events[1]);
        let [Mutation::Upsert(view)] = mutations.as_slice() else {
            panic!("expected a single upsert, got {mutations:?}");
        };
        assert_eq!(view.total_hours, "09:00");
        assert_eq!(view.regular_hours, dec!(8.5));
        assert_eq!(view.overtime_hours, dec!(0.5));
        assert_eq!(view.status, EntryStatus::Pending);
    }

    #[rstest]
    fn it_should_project_a_removal_for_deleted_entries() {
        let decider = TimeSheet::new(DurationCalculator::new(510));
        let deleted = TimeSheetEvent::EntryDeletedV1 {
            entry_id: "te-0001".into(),
        };
        let mutations = decider.project(&TimeSheetState::default(), &deleted);
        assert_eq!(mutations, vec![Mutation::Remove("te-0001".into())]);
    }

    #[rstest]
    fn it_should_show_zero_hours_while_open() {
        let decider = TimeSheet::new(DurationCalculator::new(510));
        let event = TimeSheetEvent::ClockedInV1 {
            entry_id: "te-0001".into(),
            user_id: "user-0001".into(),
            at: at("2026-10-14 08:00"),
        };
        let state = decider.fold([&event]);
        let mutations = decider.project(&state, &event);
        let [Mutation::Upsert(view)] = mutations.as_slice() else {
            panic!("expected a single upsert");
        };
        assert_eq!(view.total_hours, "00:00");
        assert_eq!(view.status, EntryStatus::Open);
    }
}
