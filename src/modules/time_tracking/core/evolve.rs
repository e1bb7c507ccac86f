use crate::modules::time_tracking::core::duration::Interval;
use crate::modules::time_tracking::core::events::TimeSheetEvent;
use crate::modules::time_tracking::core::state::{BreakPeriod, TimeEntry, TimeSheetState};

pub fn evolve(mut state: TimeSheetState, event: &TimeSheetEvent) -> TimeSheetState {
    match event {
        TimeSheetEvent::ClockedInV1 {
            entry_id,
            user_id,
            at,
        } => {
            state.entries.insert(
                entry_id.clone(),
                TimeEntry {
                    id: entry_id.clone(),
                    user_id: user_id.clone(),
                    clock_in: *at,
                    clock_out: None,
                    breaks: Vec::new(),
                    description: None,
                    approval: None,
                },
            );
        }
        TimeSheetEvent::BreakStartedV1 { entry_id, at } => {
            if let Some(entry) = state.entries.get_mut(entry_id) {
                entry.breaks.push(BreakPeriod {
                    start: *at,
                    end: None,
                });
            }
        }
        TimeSheetEvent::BreakEndedV1 { entry_id, at } => {
            if let Some(entry) = state.entries.get_mut(entry_id) {
                if let Some(running) = entry.breaks.iter_mut().find(|b| b.end.is_none()) {
                    running.end = Some(*at);
                }
            }
        }
        TimeSheetEvent::ClockedOutV1 { entry_id, at } => {
            if let Some(entry) = state.entries.get_mut(entry_id) {
                entry.clock_out = Some(*at);
            }
        }
        TimeSheetEvent::EntryRecordedV1 {
            entry_id,
            user_id,
            work,
            breaks,
            description,
        } => {
            state.entries.insert(
                entry_id.clone(),
                TimeEntry {
                    id: entry_id.clone(),
                    user_id: user_id.clone(),
                    clock_in: work.start,
                    clock_out: Some(work.end),
                    breaks: to_periods(breaks),
                    description: description.clone(),
                    approval: None,
                },
            );
        }
        TimeSheetEvent::EntryUpdatedV1 {
            entry_id,
            work,
            breaks,
            description,
        } => {
            if let Some(entry) = state.entries.get_mut(entry_id) {
                entry.clock_in = work.start;
                entry.clock_out = Some(work.end);
                entry.breaks = to_periods(breaks);
                entry.description = description.clone();
            }
        }
        TimeSheetEvent::EntryDeletedV1 { entry_id } => {
            state.entries.remove(entry_id);
        }
        TimeSheetEvent::EntryReviewedV1 { entry_id, record } => {
            if let Some(entry) = state.entries.get_mut(entry_id) {
                entry.approval = Some(record.clone());
            }
        }
    }
    state
}

fn to_periods(breaks: &[Interval]) -> Vec<BreakPeriod> {
    breaks
        .iter()
        .map(|b| BreakPeriod {
            start: b.start,
            end: Some(b.end),
        })
        .collect()
}
