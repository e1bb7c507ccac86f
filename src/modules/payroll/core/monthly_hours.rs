// Buckets approved daily report hours of one employee into regular,
// overtime and emergency hours.
//
// Emergency (Notdienst) hours always go to the emergency bucket. Per day the
// remaining hours up to the overtime threshold are regular, the rest is
// overtime. Every distinct report date counts as one work day.

use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::payroll::core::premium_pay::MonthlyHours;
use crate::shared::core::approval::ApprovalStatus;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).and_then(|d| d.pred_opt())
    }
}

pub fn monthly_hours(
    reports: &[DailyReportView],
    month: Month,
    overtime_threshold_minutes: i64,
) -> MonthlyHours {
    let threshold = Decimal::from(overtime_threshold_minutes) / Decimal::from(60);

    let mut days: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for report in reports
        .iter()
        .filter(|r| r.status == ApprovalStatus::Approved && month.contains(r.date))
    {
        let (normal, emergency) = days.entry(report.date).or_default();
        if report.emergency {
            *emergency += report.hours;
        } else {
            *normal += report.hours;
        }
    }

    let mut hours = MonthlyHours {
        work_days: days.len() as u32,
        ..MonthlyHours::default()
    };
    for (normal, emergency) in days.into_values() {
        let regular = normal.min(threshold);
        hours.regular += regular;
        hours.overtime += normal - regular;
        hours.emergency += emergency;
    }
    hours
}

#[cfg(test)]
mod monthly_hours_tests {
    use super::*;
    use crate::tests::fixtures::reports::DailyReportViewBuilder;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn october() -> Month {
        Month::new(2026, 10).unwrap()
    }

    fn report(id: &str, date: &str) -> DailyReportViewBuilder {
        DailyReportViewBuilder::new().id(id).date(date)
    }

    #[rstest]
    fn it_should_split_each_day_at_the_threshold() {
        let reports = vec![
            report("a", "2026-10-12").hours(dec!(6)).build(),
            report("b", "2026-10-12").hours(dec!(4)).build(),
            report("c", "2026-10-13").hours(dec!(8)).build(),
        ];
        let hours = monthly_hours(&reports, october(), 510);
        assert_eq!(hours.regular, dec!(16.5));
        assert_eq!(hours.overtime, dec!(1.5));
        assert_eq!(hours.work_days, 2);
    }

    #[rstest]
    fn it_should_book_emergency_hours_separately() {
        let call_out = report("a", "2026-10-17").hours(dec!(3)).emergency(true);
        let reports = vec![
            call_out.build(),
            report("b", "2026-10-16").hours(dec!(8.5)).build(),
        ];
        let hours = monthly_hours(&reports, october(), 510);
        assert_eq!(hours.emergency, dec!(3));
        assert_eq!(hours.regular, dec!(8.5));
        assert_eq!(hours.overtime, Decimal::ZERO);
        assert_eq!(hours.work_days, 2);
    }

    #[rstest]
    fn it_should_skip_unapproved_reports_and_other_months() {
        let pending = report("a", "2026-10-12").status(ApprovalStatus::Pending);
        let reports = vec![pending.build(), report("b", "2026-09-30").build()];
        let hours = monthly_hours(&reports, october(), 510);
        assert_eq!(hours, MonthlyHours::default());
    }

    #[rstest]
    #[case(2026, 2, "2026-02-28")]
    #[case(2028, 2, "2028-02-29")]
    #[case(2026, 12, "2026-12-31")]
    fn it_should_know_the_last_day_of_a_month(
        #[case] year: i32,
        #[case] month: u32,
        #[case] last: &str,
    ) {
        let month = Month::new(year, month).unwrap();
        assert_eq!(month.last_day(), last.parse().ok());
    }

    #[rstest]
    fn it_should_refuse_month_thirteen() {
        assert_eq!(Month::new(2026, 13), None);
    }
}
