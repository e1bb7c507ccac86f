use crate::modules::absences::core::state::{AbsenceType, DateRange};
use crate::shared::core::approval::Review;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsenceCommand {
    Request {
        absence_id: String,
        user_id: String,
        absence_type: AbsenceType,
        range: DateRange,
        reason: Option<String>,
        at: DateTime<Utc>,
    },
    Withdraw {
        absence_id: String,
        by: String,
    },
    Review {
        absence_id: String,
        review: Review,
    },
}
