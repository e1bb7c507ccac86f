use crate::modules::absences::core::commands::AbsenceCommand;
use crate::modules::absences::core::events::AbsenceEvent;
use crate::modules::absences::core::state::{Absence, AbsenceState, DateRange};
use crate::shared::core::access::Permission;
use crate::shared::core::approval::{ApprovalError, ApprovalStatus, review};
use crate::shared::core::decider::{Rejection, RejectionKind};
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("overlaps an existing absence from {} to {}", .0.start, .0.end)]
    Overlaps(DateRange),

    #[error("absence {0} already exists")]
    AlreadyExists(String),

    #[error("absence not found")]
    NotFound,

    #[error("only the requesting employee may withdraw an absence")]
    NotOwner,

    #[error("absence is {0} and can no longer be withdrawn")]
    NotPending(ApprovalStatus),

    #[error(transparent)]
    Approval(#[from] ApprovalError),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::InvalidRange { .. } => RejectionKind::Invalid,
            DecideError::Overlaps(_)
            | DecideError::AlreadyExists(_)
            | DecideError::NotPending(_) => RejectionKind::Conflict,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::NotOwner => RejectionKind::Forbidden,
            DecideError::Approval(inner) => inner.kind(),
        }
    }
}

pub fn decide(
    state: &AbsenceState,
    command: AbsenceCommand,
) -> Result<Vec<AbsenceEvent>, DecideError> {
    match command {
        AbsenceCommand::Request {
            absence_id,
            user_id,
            absence_type,
            range,
            reason,
            at,
        } => {
            if state.absences.contains_key(&absence_id) {
                return Err(DecideError::AlreadyExists(absence_id));
            }
            if range.start > range.end {
                return Err(DecideError::InvalidRange {
                    start: range.start,
                    end: range.end,
                });
            }
            if let Some(clash) = state.held().find(|other| other.range.overlaps(&range)) {
                return Err(DecideError::Overlaps(clash.range));
            }
            let reason = reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty());
            Ok(vec![AbsenceEvent::AbsenceRequestedV1 {
                absence_id,
                user_id,
                absence_type,
                range,
                reason,
                requested_at: at,
            }])
        }

        AbsenceCommand::Withdraw { absence_id, by } => {
            let absence = live(state, &absence_id)?;
            if absence.user_id != by {
                return Err(DecideError::NotOwner);
            }
            if absence.status() != ApprovalStatus::Pending {
                return Err(DecideError::NotPending(absence.status()));
            }
            Ok(vec![AbsenceEvent::AbsenceWithdrawnV1 { absence_id }])
        }

        AbsenceCommand::Review {
            absence_id,
            review: request,
        } => {
            let absence = live(state, &absence_id)?;
            let record = review(
                absence.status(),
                &absence.user_id,
                &request,
                Permission::ReviewAbsences,
            )?;
            Ok(vec![AbsenceEvent::AbsenceReviewedV1 { absence_id, record }])
        }
    }
}

fn live<'a>(state: &'a AbsenceState, absence_id: &str) -> Result<&'a Absence, DecideError> {
    state.live(absence_id).ok_or(DecideError::NotFound)
}
