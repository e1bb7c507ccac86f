use crate::shared::core::approval::{ApprovalRecord, ApprovalStatus};
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    #[serde(alias = "urlaub")]
    Vacation,
    #[serde(alias = "krank")]
    Sick,
}

impl AbsenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            AbsenceType::Vacation => "vacation",
            AbsenceType::Sick => "sick",
        }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Monday to Friday days inside the range.
    pub fn working_days(&self) -> u32 {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
            .count() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Absence {
    pub id: String,
    pub user_id: String,
    pub absence_type: AbsenceType,
    pub range: DateRange,
    pub reason: Option<String>,
    pub requested_at: DateTime<Utc>,
    pub approval: Option<ApprovalRecord>,
    pub withdrawn: bool,
}

impl Absence {
    pub fn status(&self) -> ApprovalStatus {
        self.approval
            .as_ref()
            .map(|record| record.status)
            .unwrap_or(ApprovalStatus::Pending)
    }
}

/// Every absence of one employee, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceState {
    pub absences: BTreeMap<String, Absence>,
}

impl AbsenceState {
    /// Requests that still block their days: pending or approved.
    pub fn held(&self) -> impl Iterator<Item = &Absence> {
        self.absences
            .values()
            .filter(|a| !a.withdrawn && a.status() != ApprovalStatus::Rejected)
    }

    pub fn live(&self, absence_id: &str) -> Option<&Absence> {
        self.absences.get(absence_id).filter(|a| !a.withdrawn)
    }
}
