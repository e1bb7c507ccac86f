use crate::modules::time_tracking::core::commands::TimeSheetCommand;
use crate::modules::time_tracking::core::duration::Interval;
use crate::modules::time_tracking::core::events::TimeSheetEvent;
use crate::modules::time_tracking::core::state::{EntryStatus, TimeEntry, TimeSheetState};
use crate::shared::core::access::Permission;
use crate::shared::core::approval::{ApprovalError, review};
use crate::shared::core::decider::{Rejection, RejectionKind};
use chrono::NaiveDateTime;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("already clocked in since {0}")]
    AlreadyClockedIn(NaiveDateTime),

    #[error("not clocked in")]
    NotClockedIn,

    #[error("a break is already running")]
    BreakAlreadyStarted,

    #[error("no break is running")]
    NoBreakRunning,

    #[error("end {end} is before start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("time entry {0} already exists")]
    AlreadyExists(String),

    #[error("time entry {0} not found")]
    NotFound(String),

    #[error("time entry {0} is still open")]
    StillOpen(String),

    #[error("time entry is {0} and can no longer be changed")]
    Locked(EntryStatus),

    #[error("break must lie within the working time")]
    BreakOutsideWork,

    #[error("overlaps time entry {0}")]
    Overlaps(String),

    #[error(transparent)]
    Approval(#[from] ApprovalError),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::AlreadyClockedIn(_)
            | DecideError::BreakAlreadyStarted
            | DecideError::AlreadyExists(_)
            | DecideError::StillOpen(_)
            | DecideError::Locked(_)
            | DecideError::Overlaps(_) => RejectionKind::Conflict,
            DecideError::NotClockedIn
            | DecideError::NoBreakRunning
            | DecideError::InvalidInterval { .. }
            | DecideError::BreakOutsideWork => RejectionKind::Invalid,
            DecideError::NotFound(_) => RejectionKind::NotFound,
            DecideError::Approval(inner) => inner.kind(),
        }
    }
}

pub fn decide(
    state: &TimeSheetState,
    command: TimeSheetCommand,
) -> Result<Vec<TimeSheetEvent>, DecideError> {
    match command {
        TimeSheetCommand::ClockIn {
            entry_id,
            user_id,
            at,
        } => {
            if let Some(open) = state.open_entry() {
                return Err(DecideError::AlreadyClockedIn(open.clock_in));
            }
            if state.entries.contains_key(&entry_id) {
                return Err(DecideError::AlreadyExists(entry_id));
            }
            let instant = Interval { start: at, end: at };
            ensure_no_overlap(state, &instant, None)?;
            Ok(vec![TimeSheetEvent::ClockedInV1 {
                entry_id,
                user_id,
                at,
            }])
        }

        TimeSheetCommand::ClockOut { at } => {
            let open = state.open_entry().ok_or(DecideError::NotClockedIn)?;
            if at < open.clock_in {
                return Err(DecideError::InvalidInterval {
                    start: open.clock_in,
                    end: at,
                });
            }
            let mut events = Vec::with_capacity(2);
            if let Some(running) = open.running_break() {
                events.push(TimeSheetEvent::BreakEndedV1 {
                    entry_id: open.id.clone(),
                    at: at.max(running.start),
                });
            }
            events.push(TimeSheetEvent::ClockedOutV1 {
                entry_id: open.id.clone(),
                at,
            });
            Ok(events)
        }

        TimeSheetCommand::StartBreak { at } => {
            let open = state.open_entry().ok_or(DecideError::NotClockedIn)?;
            if open.running_break().is_some() {
                return Err(DecideError::BreakAlreadyStarted);
            }
            if at < open.clock_in {
                return Err(DecideError::BreakOutsideWork);
            }
            Ok(vec![TimeSheetEvent::BreakStartedV1 {
                entry_id: open.id.clone(),
                at,
            }])
        }

        TimeSheetCommand::EndBreak { at } => {
            let open = state.open_entry().ok_or(DecideError::NotClockedIn)?;
            let running = open.running_break().ok_or(DecideError::NoBreakRunning)?;
            if at < running.start {
                return Err(DecideError::InvalidInterval {
                    start: running.start,
                    end: at,
                });
            }
            Ok(vec![TimeSheetEvent::BreakEndedV1 {
                entry_id: open.id.clone(),
                at,
            }])
        }

        TimeSheetCommand::RecordEntry {
            entry_id,
            user_id,
            work,
            breaks,
            description,
        } => {
            if state.entries.contains_key(&entry_id) {
                return Err(DecideError::AlreadyExists(entry_id));
            }
            validate_work(&work, &breaks)?;
            ensure_no_overlap(state, &work, None)?;
            Ok(vec![TimeSheetEvent::EntryRecordedV1 {
                entry_id,
                user_id,
                work,
                breaks,
                description,
            }])
        }

        TimeSheetCommand::UpdateEntry {
            entry_id,
            work,
            breaks,
            description,
        } => {
            let entry = find(state, &entry_id)?;
            match entry.status() {
                EntryStatus::Pending => {}
                EntryStatus::Open => return Err(DecideError::StillOpen(entry_id)),
                locked => return Err(DecideError::Locked(locked)),
            }
            validate_work(&work, &breaks)?;
            ensure_no_overlap(state, &work, Some(&entry_id))?;
            Ok(vec![TimeSheetEvent::EntryUpdatedV1 {
                entry_id,
                work,
                breaks,
                description,
            }])
        }

        TimeSheetCommand::DeleteEntry { entry_id } => {
            let entry = find(state, &entry_id)?;
            if entry.status() == EntryStatus::Approved {
                return Err(DecideError::Locked(EntryStatus::Approved));
            }
            Ok(vec![TimeSheetEvent::EntryDeletedV1 { entry_id }])
        }

        TimeSheetCommand::ReviewEntry {
            entry_id,
            review: request,
        } => {
            let entry = find(state, &entry_id)?;
            if entry.status() == EntryStatus::Open {
                return Err(DecideError::StillOpen(entry_id));
            }
            let record = review(
                entry.approval_status(),
                &entry.user_id,
                &request,
                Permission::ReviewTimeEntries,
            )?;
            Ok(vec![TimeSheetEvent::EntryReviewedV1 { entry_id, record }])
        }
    }
}

fn find<'a>(state: &'a TimeSheetState, entry_id: &str) -> Result<&'a TimeEntry, DecideError> {
    state
        .entries
        .get(entry_id)
        .ok_or_else(|| DecideError::NotFound(entry_id.to_string()))
}

fn validate_work(work: &Interval, breaks: &[Interval]) -> Result<(), DecideError> {
    if work.end < work.start {
        return Err(DecideError::InvalidInterval {
            start: work.start,
            end: work.end,
        });
    }
    for b in breaks {
        if b.end < b.start {
            return Err(DecideError::InvalidInterval {
                start: b.start,
                end: b.end,
            });
        }
        if !work.contains(b.start) || !work.contains(b.end) {
            return Err(DecideError::BreakOutsideWork);
        }
    }
    Ok(())
}

fn ensure_no_overlap(
    state: &TimeSheetState,
    work: &Interval,
    except: Option<&str>,
) -> Result<(), DecideError> {
    match state
        .entries
        .values()
        .filter(|e| Some(e.id.as_str()) != except)
        .find(|e| e.overlaps(work))
    {
        Some(other) => Err(DecideError::Overlaps(other.id.clone())),
        None => Ok(()),
    }
}
