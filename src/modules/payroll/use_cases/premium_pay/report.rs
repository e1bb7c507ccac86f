use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::identity::core::user::User;
use crate::modules::payroll::core::monthly_hours::{Month, monthly_hours};
use crate::modules::payroll::core::premium_pay::{MonthlyHours, PremiumPay, PremiumPayCalculator};
use crate::shared::core::access::Permission;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PremiumPayLine {
    pub user_id: String,
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub hours: MonthlyHours,
    pub pay: PremiumPay,
}

/// One line per employee who reports hours, plus anyone with approved
/// reports in the month. Sorted by name.
pub fn premium_pay_lines(
    users: &[User],
    reports: &[DailyReportView],
    month: Month,
    overtime_threshold_minutes: i64,
    calculator: &PremiumPayCalculator,
) -> Vec<PremiumPayLine> {
    let reporting: BTreeSet<&str> = reports
        .iter()
        .filter(|r| month.contains(r.date))
        .map(|r| r.user_id.as_str())
        .collect();

    let mut lines: Vec<PremiumPayLine> = users
        .iter()
        .filter(|u| {
            (u.active && u.role.can(Permission::SubmitReports)) || reporting.contains(u.id.as_str())
        })
        .map(|user| {
            let own: Vec<DailyReportView> = reports
                .iter()
                .filter(|r| r.user_id == user.id)
                .cloned()
                .collect();
            let hours = monthly_hours(&own, month, overtime_threshold_minutes);
            PremiumPayLine {
                user_id: user.id.clone(),
                name: user.name.clone(),
                year: month.year,
                month: month.month,
                hours,
                pay: calculator.calculate(&hours),
            }
        })
        .collect();
    lines.sort_by(|a, b| (&a.name, &a.user_id).cmp(&(&b.name, &b.user_id)));
    lines
}
