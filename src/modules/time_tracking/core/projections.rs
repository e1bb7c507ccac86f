// Read side row for one time entry, with the computed durations.

use crate::modules::time_tracking::core::duration::{DurationCalculator, WorkDuration};
use crate::modules::time_tracking::core::state::{EntryStatus, TimeEntry};
use crate::shared::infrastructure::read_model::Keyed;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakView {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntryView {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub breaks: Vec<BreakView>,
    pub break_minutes: i64,
    /// Net working time as `HH:MM`.
    pub total_hours: String,
    pub total_minutes: i64,
    pub regular_hours: Decimal,
    pub overtime_hours: Decimal,
    pub status: EntryStatus,
    pub description: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub review_comment: Option<String>,
}

impl Keyed for TimeEntryView {
    fn key(&self) -> &str {
        &self.id
    }
}

pub fn time_entry_view(entry: &TimeEntry, calculator: &DurationCalculator) -> TimeEntryView {
    let duration = entry
        .work_interval()
        .map(|work| calculator.calculate(&work, &entry.closed_breaks()))
        .unwrap_or_default();
    view_with(entry, duration)
}

fn view_with(entry: &TimeEntry, duration: WorkDuration) -> TimeEntryView {
    let record = entry.approval.as_ref();
    TimeEntryView {
        id: entry.id.clone(),
        user_id: entry.user_id.clone(),
        date: entry.clock_in.date(),
        clock_in: entry.clock_in,
        clock_out: entry.clock_out,
        breaks: entry
            .breaks
            .iter()
            .map(|b| BreakView {
                start: b.start,
                end: b.end,
            })
            .collect(),
        break_minutes: duration.break_minutes,
        total_hours: duration.formatted(),
        total_minutes: duration.total_minutes,
        regular_hours: duration.regular_hours(),
        overtime_hours: duration.overtime_hours(),
        status: entry.status(),
        description: entry.description.clone(),
        approved_by: record.map(|r| r.decided_by.clone()),
        approved_at: record.map(|r| r.decided_at),
        review_comment: record.and_then(|r| r.comment.clone()),
    }
}
