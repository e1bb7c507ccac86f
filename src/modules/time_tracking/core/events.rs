// Time sheet events. Prefer additive changes; a breaking change gets a new
// versioned variant and historical events keep their meaning.

use crate::modules::time_tracking::core::duration::Interval;
use crate::shared::core::approval::ApprovalRecord;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeSheetEvent {
    ClockedInV1 {
        entry_id: String,
        user_id: String,
        at: NaiveDateTime,
    },
    BreakStartedV1 {
        entry_id: String,
        at: NaiveDateTime,
    },
    BreakEndedV1 {
        entry_id: String,
        at: NaiveDateTime,
    },
    ClockedOutV1 {
        entry_id: String,
        at: NaiveDateTime,
    },
    EntryRecordedV1 {
        entry_id: String,
        user_id: String,
        work: Interval,
        breaks: Vec<Interval>,
        description: Option<String>,
    },
    EntryUpdatedV1 {
        entry_id: String,
        work: Interval,
        breaks: Vec<Interval>,
        description: Option<String>,
    },
    EntryDeletedV1 {
        entry_id: String,
    },
    EntryReviewedV1 {
        entry_id: String,
        record: ApprovalRecord,
    },
}

impl TimeSheetEvent {
    pub fn entry_id(&self) -> &str {
        match self {
            TimeSheetEvent::ClockedInV1 { entry_id, .. }
            | TimeSheetEvent::BreakStartedV1 { entry_id, .. }
            | TimeSheetEvent::BreakEndedV1 { entry_id, .. }
            | TimeSheetEvent::ClockedOutV1 { entry_id, .. }
            | TimeSheetEvent::EntryRecordedV1 { entry_id, .. }
            | TimeSheetEvent::EntryUpdatedV1 { entry_id, .. }
            | TimeSheetEvent::EntryDeletedV1 { entry_id }
            | TimeSheetEvent::EntryReviewedV1 { entry_id, .. } => entry_id,
        }
    }
}
