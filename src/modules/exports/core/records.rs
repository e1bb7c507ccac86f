// CSV rows, one type per export. Header names equal the serialized field
// names, in field order.

use crate::modules::absences::core::projections::AbsenceView;
use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::orders::core::projections::OrderView;
use crate::modules::payroll::use_cases::premium_pay::report::PremiumPayLine;
use crate::modules::time_tracking::core::projections::TimeEntryView;
use crate::shared::infrastructure::csv_export::CsvRecord;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DATETIME: &str = "%Y-%m-%d %H:%M";

fn datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|v| v.format(DATETIME).to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryRecord {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub break_minutes: i64,
    pub total_hours: String,
    pub regular_hours: Decimal,
    pub overtime_hours: Decimal,
    pub status: String,
    pub description: String,
}

impl CsvRecord for TimeEntryRecord {
    const HEADER: &'static [&'static str] = &[
        "id",
        "user_id",
        "date",
        "clock_in",
        "clock_out",
        "break_minutes",
        "total_hours",
        "regular_hours",
        "overtime_hours",
        "status",
        "description",
    ];
}

impl From<&TimeEntryView> for TimeEntryRecord {
    fn from(view: &TimeEntryView) -> Self {
        Self {
            id: view.id.clone(),
            user_id: view.user_id.clone(),
            date: view.date.to_string(),
            clock_in: datetime(Some(view.clock_in)),
            clock_out: datetime(view.clock_out),
            break_minutes: view.break_minutes,
            total_hours: view.total_hours.clone(),
            regular_hours: view.regular_hours,
            overtime_hours: view.overtime_hours,
            status: view.status.as_str().to_string(),
            description: view.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub order_type: String,
    pub title: String,
    pub customer_id: String,
    pub assigned_to: String,
    pub priority: String,
    pub status: String,
    pub planned_start: String,
    pub planned_end: String,
    pub completed_at: String,
}

impl CsvRecord for OrderRecord {
    const HEADER: &'static [&'static str] = &[
        "id",
        "order_type",
        "title",
        "customer_id",
        "assigned_to",
        "priority",
        "status",
        "planned_start",
        "planned_end",
        "completed_at",
    ];
}

impl From<&OrderView> for OrderRecord {
    fn from(view: &OrderView) -> Self {
        Self {
            id: view.id.clone(),
            order_type: view.order_type.as_str().to_string(),
            title: view.title.clone(),
            customer_id: view.customer_id.clone().unwrap_or_default(),
            assigned_to: view.assigned_to.clone().unwrap_or_default(),
            priority: view.priority.as_str().to_string(),
            status: view.status.as_str().to_string(),
            planned_start: datetime(view.planned_start),
            planned_end: datetime(view.planned_end),
            completed_at: datetime(view.completed_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    pub id: String,
    pub user_id: String,
    pub absence_type: String,
    pub start_date: String,
    pub end_date: String,
    pub working_days: u32,
    pub status: String,
    pub approved_by: String,
    pub reason: String,
}

impl CsvRecord for AbsenceRecord {
    const HEADER: &'static [&'static str] = &[
        "id",
        "user_id",
        "absence_type",
        "start_date",
        "end_date",
        "working_days",
        "status",
        "approved_by",
        "reason",
    ];
}

impl From<&AbsenceView> for AbsenceRecord {
    fn from(view: &AbsenceView) -> Self {
        Self {
            id: view.id.clone(),
            user_id: view.user_id.clone(),
            absence_type: view.absence_type.as_str().to_string(),
            start_date: view.start_date.to_string(),
            end_date: view.end_date.to_string(),
            working_days: view.working_days,
            status: view.status.as_str().to_string(),
            approved_by: view.approved_by.clone().unwrap_or_default(),
            reason: view.reason.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReportRecord {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub hours: Decimal,
    pub emergency: bool,
    pub order_id: String,
    pub description: String,
    pub materials: String,
    pub status: String,
    pub approved_by: String,
}

impl CsvRecord for DailyReportRecord {
    const HEADER: &'static [&'static str] = &[
        "id",
        "user_id",
        "date",
        "hours",
        "emergency",
        "order_id",
        "description",
        "materials",
        "status",
        "approved_by",
    ];
}

impl From<&DailyReportView> for DailyReportRecord {
    fn from(view: &DailyReportView) -> Self {
        Self {
            id: view.id.clone(),
            user_id: view.user_id.clone(),
            date: view.date.to_string(),
            hours: view.hours,
            emergency: view.emergency,
            order_id: view.order_id.clone().unwrap_or_default(),
            description: view.description.clone(),
            materials: view.materials.clone().unwrap_or_default(),
            status: view.status.as_str().to_string(),
            approved_by: view.approved_by.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumPayRecord {
    pub user_id: String,
    pub name: String,
    pub month: String,
    pub work_days: u32,
    pub regular_hours: Decimal,
    pub overtime_hours: Decimal,
    pub emergency_hours: Decimal,
    pub base_pay: Decimal,
    pub overtime_pay: Decimal,
    pub emergency_pay: Decimal,
    pub efficiency_bonus: Decimal,
    pub total: Decimal,
}

impl CsvRecord for PremiumPayRecord {
    const HEADER: &'static [&'static str] = &[
        "user_id",
        "name",
        "month",
        "work_days",
        "regular_hours",
        "overtime_hours",
        "emergency_hours",
        "base_pay",
        "overtime_pay",
        "emergency_pay",
        "efficiency_bonus",
        "total",
    ];
}

impl From<&PremiumPayLine> for PremiumPayRecord {
    fn from(line: &PremiumPayLine) -> Self {
        Self {
            user_id: line.user_id.clone(),
            name: line.name.clone(),
            month: format!("{:04}-{:02}", line.year, line.month),
            work_days: line.hours.work_days,
            regular_hours: line.hours.regular,
            overtime_hours: line.hours.overtime,
            emergency_hours: line.hours.emergency,
            base_pay: line.pay.base_pay,
            overtime_pay: line.pay.overtime_pay,
            emergency_pay: line.pay.emergency_pay,
            efficiency_bonus: line.pay.efficiency_bonus,
            total: line.pay.total,
        }
    }
}
