// Work duration rules: parsing clock input, break deduction and the
// regular/overtime split.
//
// Clock input is either a bare `HH:MM` (optionally `HH:MM:SS`) or an ISO
// datetime. A bare end time earlier than its start rolls over to the next
// day. Malformed input is an error, never a zero duration.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid time: {0:?}")]
    InvalidTime(String),

    #[error("end {end} is before start {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockValue {
    TimeOfDay(NaiveTime),
    At(NaiveDateTime),
}

impl ClockValue {
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        match self {
            ClockValue::TimeOfDay(time) => date.and_time(time),
            ClockValue::At(at) => at,
        }
    }

    fn is_bare(self) -> bool {
        matches!(self, ClockValue::TimeOfDay(_))
    }
}

const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];
const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_clock(input: &str) -> Result<ClockValue, DurationError> {
    let s = input.trim();
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(s, format) {
            return Ok(ClockValue::TimeOfDay(time));
        }
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Ok(ClockValue::At(at.naive_local()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ClockValue::At(at));
        }
    }
    Err(DurationError::InvalidTime(input.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DurationError> {
        if end < start {
            return Err(DurationError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Resolves clock input on `date`.
    pub fn resolve(date: NaiveDate, start: &str, end: &str) -> Result<Self, DurationError> {
        let start_value = parse_clock(start)?;
        let end_value = parse_clock(end)?;
        let start = start_value.on(date);
        let mut end = end_value.on(start.date());
        if end < start && end_value.is_bare() {
            end += TimeDelta::days(1);
        }
        Interval::new(start, end)
    }

    /// Resolves a break inside this interval. Bare times are placed at or
    /// after the interval start, so a 01:00 break in a 22:00 shift lands on
    /// the next day.
    pub fn resolve_within(&self, start: &str, end: &str) -> Result<Self, DurationError> {
        let start_value = parse_clock(start)?;
        let end_value = parse_clock(end)?;
        let mut start = start_value.on(self.start.date());
        if start < self.start && start_value.is_bare() {
            start += TimeDelta::days(1);
        }
        let mut end = end_value.on(start.date());
        if end < start && end_value.is_bare() {
            end += TimeDelta::days(1);
        }
        Interval::new(start, end)
    }

    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }

    fn clip(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (end > start).then_some(Interval { start, end })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkDuration {
    pub elapsed_minutes: i64,
    pub break_minutes: i64,
    pub total_minutes: i64,
    pub regular_minutes: i64,
    pub overtime_minutes: i64,
}

impl WorkDuration {
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_minutes)
    }

    pub fn regular_hours(&self) -> Decimal {
        minutes_to_hours(self.regular_minutes)
    }

    pub fn overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.overtime_minutes)
    }

    /// Total as `HH:MM`.
    pub fn formatted(&self) -> String {
        format_minutes(self.total_minutes)
    }
}

pub fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

pub fn format_minutes(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationCalculator {
    overtime_threshold_minutes: i64,
}

impl DurationCalculator {
    pub fn new(overtime_threshold_minutes: i64) -> Self {
        Self {
            overtime_threshold_minutes: overtime_threshold_minutes.max(0),
        }
    }

    pub fn overtime_threshold_minutes(&self) -> i64 {
        self.overtime_threshold_minutes
    }

    pub fn calculate(&self, work: &Interval, breaks: &[Interval]) -> WorkDuration {
        let elapsed_minutes = work.minutes();
        let break_minutes = merged_break_minutes(work, breaks);
        let total_minutes = (elapsed_minutes - break_minutes).max(0);
        let (regular_minutes, overtime_minutes) = self.split(total_minutes);
        WorkDuration {
            elapsed_minutes,
            break_minutes,
            total_minutes,
            regular_minutes,
            overtime_minutes,
        }
    }

    /// Splits net minutes into (regular, overtime).
    pub fn split(&self, total_minutes: i64) -> (i64, i64) {
        let regular = total_minutes.min(self.overtime_threshold_minutes);
        (regular, total_minutes - regular)
    }

    /// Convenience for raw clock strings, e.g. `("08:00", "17:00", &[("12:00", "12:30")])`.
    pub fn calculate_clock(
        &self,
        clock_in: &str,
        clock_out: &str,
        breaks: &[(&str, &str)],
    ) -> Result<WorkDuration, DurationError> {
        let work = Interval::resolve(NaiveDate::default(), clock_in, clock_out)?;
        let breaks = breaks
            .iter()
            .map(|(start, end)| work.resolve_within(start, end))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.calculate(&work, &breaks))
    }
}

fn merged_break_minutes(work: &Interval, breaks: &[Interval]) -> i64 {
    let mut clipped: Vec<Interval> = breaks.iter().filter_map(|b| work.clip(b)).collect();
    clipped.sort_by_key(|b| b.start);

    let mut total = 0;
    let mut current: Option<Interval> = None;
    for b in clipped {
        current = match current {
            Some(mut open) if b.start <= open.end => {
                open.end = open.end.max(b.end);
                Some(open)
            }
            Some(done) => {
                total += done.minutes();
                Some(b)
            }
            None => Some(b),
        };
    }
    total + current.map(|b| b.minutes()).unwrap_or(0)
}

#[cfg(test)]
mod duration_calculator_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    #[fixture]
    fn calculator() -> DurationCalculator {
        DurationCalculator::new(510)
    }

    #[rstest]
    fn it_should_split_a_nine_hour_day_into_regular_and_overtime(calculator: DurationCalculator) {
        let duration = calculator.calculate_clock("08:00", "17:00", &[]).unwrap();
        assert_eq!(duration.formatted(), "09:00");
        assert_eq!(duration.regular_hours(), dec!(8.5));
        assert_eq!(duration.overtime_hours(), dec!(0.5));
    }

    #[rstest]
    fn it_should_subtract_breaks(calculator: DurationCalculator) {
        let duration = calculator
            .calculate_clock("07:30", "16:15", &[("12:00", "12:30"), ("09:00", "09:15")])
            .unwrap();
        assert_eq!(duration.elapsed_minutes, 525);
        assert_eq!(duration.break_minutes, 45);
        assert_eq!(duration.formatted(), "08:00");
        assert_eq!(duration.overtime_minutes, 0);
    }

    #[rstest]
    fn it_should_roll_over_midnight(calculator: DurationCalculator) {
        let duration = calculator
            .calculate_clock("22:00", "06:00", &[("01:00", "01:30")])
            .unwrap();
        assert_eq!(duration.elapsed_minutes, 480);
        assert_eq!(duration.break_minutes, 30);
        assert_eq!(duration.formatted(), "07:30");
    }

    #[rstest]
    fn it_should_merge_overlapping_breaks_and_ignore_breaks_outside_work(
        calculator: DurationCalculator,
    ) {
        let duration = calculator
            .calculate_clock(
                "08:00",
                "12:00",
                &[("09:00", "10:00"), ("09:30", "10:30"), ("06:00", "07:00")],
            )
            .unwrap();
        assert_eq!(duration.break_minutes, 90);
        assert_eq!(duration.total_minutes, 150);
    }

    #[rstest]
    fn it_should_accept_iso_datetimes(calculator: DurationCalculator) {
        let duration = calculator
            .calculate_clock("2026-10-13T20:00:00", "2026-10-14T05:30", &[])
            .unwrap();
        assert_eq!(duration.total_minutes, 570);
        assert_eq!(duration.overtime_minutes, 60);
    }

    #[rstest]
    fn it_should_refuse_iso_datetimes_that_run_backwards(calculator: DurationCalculator) {
        let result = calculator.calculate_clock("2026-10-14T10:00", "2026-10-14T09:00", &[]);
        assert!(matches!(result, Err(DurationError::EndBeforeStart { .. })));
    }

    #[rstest]
    #[case("8 Uhr")]
    #[case("25:00")]
    #[case("")]
    #[case("12:60")]
    fn it_should_reject_malformed_times(calculator: DurationCalculator, #[case] input: &str) {
        let result = calculator.calculate_clock(input, "17:00", &[]);
        assert_eq!(result, Err(DurationError::InvalidTime(input.to_string())));
    }

    #[rstest]
    fn it_should_never_return_a_negative_duration_for_clock_pairs(calculator: DurationCalculator) {
        for start in (0..24 * 60).step_by(15) {
            for end in (0..24 * 60).step_by(15) {
                let clock_in = format_minutes(start);
                let clock_out = format_minutes(end);
                let duration = calculator
                    .calculate_clock(&clock_in, &clock_out, &[])
                    .unwrap();
                assert!(duration.total_minutes >= 0);
                let expected = if end < start {
                    end + 24 * 60 - start
                } else {
                    end - start
                };
                assert_eq!(
                    duration.total_minutes, expected,
                    "{clock_in} -> {clock_out}"
                );
            }
        }
    }

    #[rstest]
    fn breaks_longer_than_the_shift_should_floor_at_zero(calculator: DurationCalculator) {
        let duration = calculator
            .calculate_clock("08:00", "09:00", &[("08:00", "09:00")])
            .unwrap();
        assert_eq!(duration.total_minutes, 0);
        assert_eq!(duration.formatted(), "00:00");
    }

    #[rstest]
    #[case(0, "00:00")]
    #[case(75, "01:15")]
    #[case(-30, "-00:30")]
    fn it_should_format_minutes(#[case] minutes: i64, #[case] expected: &str) {
        assert_eq!(format_minutes(minutes), expected);
    }
}
