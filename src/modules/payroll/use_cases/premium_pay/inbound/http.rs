use crate::modules::daily_reports::use_cases::list_daily_reports::queries_port::DailyReportFilter;
use crate::modules::payroll::core::monthly_hours::Month;
use crate::modules::payroll::use_cases::premium_pay::report::{PremiumPayLine, premium_pay_lines};
use crate::shared::core::access::Permission;
use crate::shared::core::approval::ApprovalStatus;
use crate::shell::response::{ApiError, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `?year=&month=`, defaulting to the current month.
#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl MonthQuery {
    pub fn resolve(&self, state: &AppState) -> Result<Month, ApiError> {
        let today = state.clock.today();
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or(today.month());
        Month::new(year, month)
            .ok_or_else(|| ApiError::BadRequest(format!("invalid month {year}-{month}")))
    }
}

#[derive(Serialize)]
pub struct PremiumPayReport {
    pub year: i32,
    pub month: u32,
    pub lines: Vec<PremiumPayLine>,
}

/// Premium pay per employee from the approved daily reports of `month`.
pub async fn load_lines(state: &AppState, month: Month) -> Result<Vec<PremiumPayLine>, ApiError> {
    let filter = DailyReportFilter {
        status: Some(ApprovalStatus::Approved),
        from: month.first_day(),
        to: month.last_day(),
        ..DailyReportFilter::default()
    };
    let reports = state.daily_report_queries.list(&filter).await?;
    let users = state.users.list().await?;
    Ok(premium_pay_lines(
        &users,
        &reports,
        month,
        state.config.overtime_threshold_minutes,
        &state.premium_pay,
    ))
}

pub async fn premium_pay(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ViewPayroll)?;
    let Query(query) = query?;
    let month = query.resolve(&state)?;
    let lines = load_lines(&state, month).await?;
    success(
        "premium_pay",
        PremiumPayReport {
            year: month.year,
            month: month.month,
            lines,
        },
    )
}
