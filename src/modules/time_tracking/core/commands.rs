// Commands against one employee's time sheet. Transport independent.

use crate::modules::time_tracking::core::duration::Interval;
use crate::shared::core::approval::Review;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSheetCommand {
    ClockIn {
        entry_id: String,
        user_id: String,
        at: NaiveDateTime,
    },
    ClockOut {
        at: NaiveDateTime,
    },
    StartBreak {
        at: NaiveDateTime,
    },
    EndBreak {
        at: NaiveDateTime,
    },
    RecordEntry {
        entry_id: String,
        user_id: String,
        work: Interval,
        breaks: Vec<Interval>,
        description: Option<String>,
    },
    UpdateEntry {
        entry_id: String,
        work: Interval,
        breaks: Vec<Interval>,
        description: Option<String>,
    },
    DeleteEntry {
        entry_id: String,
    },
    ReviewEntry {
        entry_id: String,
        review: Review,
    },
}
