use crate::modules::absences::core::state::{Absence, AbsenceType};
use crate::shared::core::approval::ApprovalStatus;
use crate::shared::infrastructure::read_model::Keyed;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbsenceView {
    pub id: String,
    pub user_id: String,
    pub absence_type: AbsenceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub working_days: u32,
    pub reason: Option<String>,
    pub status: ApprovalStatus,
    pub requested_at: DateTime<Utc>,
    pub approved_by: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub review_comment: Option<String>,
}

impl Keyed for AbsenceView {
    fn key(&self) -> &str {
        &self.id
    }
}

impl From<&Absence> for AbsenceView {
    fn from(absence: &Absence) -> Self {
        let record = absence.approval.as_ref();
        Self {
            id: absence.id.clone(),
            user_id: absence.user_id.clone(),
            absence_type: absence.absence_type,
            start_date: absence.range.start,
            end_date: absence.range.end,
            working_days: absence.range.working_days(),
            reason: absence.reason.clone(),
            status: absence.status(),
            requested_at: absence.requested_at,
            approved_by: record.map(|r| r.decided_by.clone()),
            decided_at: record.map(|r| r.decided_at),
            review_comment: record.and_then(|r| r.comment.clone()),
        }
    }
}
