use crate::modules::daily_reports::core::commands::DailyReportCommand;
use crate::modules::daily_reports::core::decide::{DecideError, decide};
use crate::modules::daily_reports::core::events::DailyReportEvent;
use crate::modules::daily_reports::core::evolve::evolve;
use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::daily_reports::core::state::DailyReportState;
use crate::shared::core::decider::{Decider, Mutation, Projection};

pub fn stream_id(report_id: &str) -> String {
    format!("DailyReport-{report_id}")
}

pub struct DailyReports {
    correction_window_days: i64,
}

impl DailyReports {
    pub fn new(correction_window_days: i64) -> Self {
        Self {
            correction_window_days: correction_window_days.max(0),
        }
    }
}

impl Decider for DailyReports {
    type State = DailyReportState;
    type Command = DailyReportCommand;
    type Event = DailyReportEvent;
    type Error = DecideError;

    fn decide(
        &self,
        state: &DailyReportState,
        command: DailyReportCommand,
    ) -> Result<Vec<DailyReportEvent>, DecideError> {
        decide(state, command, self.correction_window_days)
    }

    fn evolve(&self, state: DailyReportState, event: &DailyReportEvent) -> DailyReportState {
        evolve(state, event)
    }
}

impl Projection for DailyReports {
    type Row = DailyReportView;

    fn project(
        &self,
        state: &DailyReportState,
        _event: &DailyReportEvent,
    ) -> Vec<Mutation<DailyReportView>> {
        state
            .report
            .as_ref()
            .map(|report| Mutation::Upsert(DailyReportView::from(report)))
            .into_iter()
            .collect()
    }
}
