use crate::modules::absences::core::events::AbsenceEvent;
use crate::modules::absences::core::state::{Absence, AbsenceState};

pub fn evolve(mut state: AbsenceState, event: &AbsenceEvent) -> AbsenceState {
    match event {
        AbsenceEvent::AbsenceRequestedV1 {
            absence_id,
            user_id,
            absence_type,
            range,
            reason,
            requested_at,
        } => {
            state.absences.insert(
                absence_id.clone(),
                Absence {
                    id: absence_id.clone(),
                    user_id: user_id.clone(),
                    absence_type: *absence_type,
                    range: *range,
                    reason: reason.clone(),
                    requested_at: *requested_at,
                    approval: None,
                    withdrawn: false,
                },
            );
        }
        AbsenceEvent::AbsenceWithdrawnV1 { absence_id } => {
            if let Some(absence) = state.absences.get_mut(absence_id) {
                absence.withdrawn = true;
            }
        }
        AbsenceEvent::AbsenceReviewedV1 { absence_id, record } => {
            if let Some(absence) = state.absences.get_mut(absence_id) {
                absence.approval = Some(record.clone());
            }
        }
    }
    state
}
