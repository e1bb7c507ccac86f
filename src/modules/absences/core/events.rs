use crate::modules::absences::core::state::{AbsenceType, DateRange};
use crate::shared::core::approval::ApprovalRecord;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AbsenceEvent {
    AbsenceRequestedV1 {
        absence_id: String,
        user_id: String,
        absence_type: AbsenceType,
        range: DateRange,
        reason: Option<String>,
        requested_at: DateTime<Utc>,
    },
    AbsenceWithdrawnV1 {
        absence_id: String,
    },
    AbsenceReviewedV1 {
        absence_id: String,
        record: ApprovalRecord,
    },
}

impl AbsenceEvent {
    pub fn absence_id(&self) -> &str {
        match self {
            AbsenceEvent::AbsenceRequestedV1 { absence_id, .. }
            | AbsenceEvent::AbsenceWithdrawnV1 { absence_id }
            | AbsenceEvent::AbsenceReviewedV1 { absence_id, .. } => absence_id,
        }
    }
}
