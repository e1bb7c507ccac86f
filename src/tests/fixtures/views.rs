use crate::modules::time_tracking::core::projections::TimeEntryView;
use crate::modules::time_tracking::core::state::EntryStatus;
use crate::tests::fixtures::time::day;
use chrono::NaiveTime;
use rust_decimal_macros::dec;

/// A closed 08:00 to 17:00 entry without breaks, pending review.
pub struct TimeEntryViewBuilder {
    view: TimeEntryView,
}

impl TimeEntryViewBuilder {
    pub fn new() -> Self {
        let date = day("2026-10-14");
        Self {
            view: TimeEntryView {
                id: "te-0001".into(),
                user_id: "user-0001".into(),
                date,
                clock_in: date.and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
                clock_out: Some(date.and_time(NaiveTime::from_hms_opt(17, 0, 0).unwrap())),
                breaks: vec![],
                break_minutes: 0,
                total_hours: "09:00".into(),
                total_minutes: 540,
                regular_hours: dec!(8.5),
                overtime_hours: dec!(0.5),
                status: EntryStatus::Pending,
                description: Some("Wartung Aufzug".into()),
                approved_by: None,
                approved_at: None,
                review_comment: None,
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.view.id = id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.view.user_id = user_id.into();
        self
    }

    /// Moves the entry to `value`, keeping its clock times.
    pub fn day(mut self, value: &str) -> Self {
        let date = day(value);
        self.view.date = date;
        self.view.clock_in = date.and_time(self.view.clock_in.time());
        self.view.clock_out = self.view.clock_out.map(|out| date.and_time(out.time()));
        self
    }

    pub fn status(mut self, status: EntryStatus) -> Self {
        self.view.status = status;
        self
    }

    pub fn build(self) -> TimeEntryView {
        self.view
    }
}
