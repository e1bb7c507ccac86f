use crate::modules::daily_reports::core::commands::DailyReportCommand;
use crate::modules::daily_reports::core::decider::stream_id;
use crate::modules::daily_reports::use_cases::list_daily_reports::queries_port::DailyReportFilter;
use crate::modules::daily_reports::use_cases::submit_daily_reports::inbound::http::report_json;
use crate::shared::core::access::Permission;
use crate::shared::core::approval::{ApprovalStatus, Verdict};
use crate::shell::response::{ApiError, success};
use crate::shell::review::parse_review;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct ReviewQuery {
    pub user_id: Option<String>,
    pub status: Option<ApprovalStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<ReviewQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ReviewReports)?;
    let Query(query) = query?;
    let filter = DailyReportFilter {
        user_id: query.user_id,
        status: query.status,
        from: query.from,
        to: query.to,
    };
    success("reports", state.daily_report_queries.list(&filter).await?)
}

async fn decide_report(
    state: AppState,
    current: CurrentUser,
    report_id: Result<Path<String>, PathRejection>,
    body: Bytes,
    verdict: Verdict,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ReviewReports)?;
    let Path(report_id) = report_id?;
    let review = parse_review(&body, verdict, &current, state.clock.now())?;
    let command = DailyReportCommand::Review {
        review,
        today: state.clock.today(),
    };
    let stream = stream_id(&report_id);
    let report = state.daily_reports.handle(&stream, command).await?;
    tracing::info!(%report_id, ?verdict, by = %current.id(), "daily report reviewed");
    report_json(&report)
}

pub async fn approve(
    State(state): State<AppState>,
    current: CurrentUser,
    report_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    decide_report(state, current, report_id, body, Verdict::Approve).await
}

pub async fn reject(
    State(state): State<AppState>,
    current: CurrentUser,
    report_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    decide_report(state, current, report_id, body, Verdict::Reject).await
}
