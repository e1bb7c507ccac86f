// Time sheet state: every entry of one employee, keyed by entry id.

use crate::modules::time_tracking::core::duration::Interval;
use crate::shared::core::approval::{ApprovalRecord, ApprovalStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Open,
    Pending,
    Approved,
    Rejected,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::Open => "open",
            EntryStatus::Pending => "pending",
            EntryStatus::Approved => "approved",
            EntryStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPeriod {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub breaks: Vec<BreakPeriod>,
    pub description: Option<String>,
    pub approval: Option<ApprovalRecord>,
}

impl TimeEntry {
    pub fn status(&self) -> EntryStatus {
        match (&self.approval, self.clock_out) {
            (Some(record), _) if record.status == ApprovalStatus::Approved => EntryStatus::Approved,
            (Some(record), _) if record.status == ApprovalStatus::Rejected => EntryStatus::Rejected,
            (_, None) => EntryStatus::Open,
            (_, Some(_)) => EntryStatus::Pending,
        }
    }

    pub fn approval_status(&self) -> ApprovalStatus {
        self.approval
            .as_ref()
            .map(|record| record.status)
            .unwrap_or(ApprovalStatus::Pending)
    }

    pub fn running_break(&self) -> Option<&BreakPeriod> {
        self.breaks.iter().find(|b| b.end.is_none())
    }

    pub fn work_interval(&self) -> Option<Interval> {
        self.clock_out.map(|end| Interval {
            start: self.clock_in,
            end,
        })
    }

    pub fn closed_breaks(&self) -> Vec<Interval> {
        self.breaks
            .iter()
            .filter_map(|b| {
                b.end.map(|end| Interval {
                    start: b.start,
                    end,
                })
            })
            .collect()
    }

    /// True if `work` shares any time with this entry. An open entry
    /// extends indefinitely.
    pub fn overlaps(&self, work: &Interval) -> bool {
        let end = self.clock_out.unwrap_or(NaiveDateTime::MAX);
        work.start < end && self.clock_in < work.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSheetState {
    pub entries: BTreeMap<String, TimeEntry>,
}

impl TimeSheetState {
    pub fn open_entry(&self) -> Option<&TimeEntry> {
        self.entries.values().find(|e| e.clock_out.is_none())
    }
}
