use crate::modules::daily_reports::core::commands::DailyReportCommand;
use crate::modules::daily_reports::core::decider::stream_id;
use crate::modules::daily_reports::core::projections::DailyReportView;
use crate::modules::daily_reports::core::state::{DailyReportState, ReportDraft};
use crate::modules::daily_reports::use_cases::list_daily_reports::queries_port::DailyReportFilter;
use crate::shared::core::access::Permission;
use crate::shell::response::{ApiError, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use anyhow::anyhow;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct ReportBody {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub description: String,
    pub hours: Decimal,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub emergency: bool,
}

impl ReportBody {
    fn into_draft(self, today: NaiveDate) -> ReportDraft {
        let blank_to_none =
            |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        ReportDraft {
            date: self.date.unwrap_or(today),
            description: self.description.trim().to_string(),
            hours: self.hours,
            materials: blank_to_none(self.materials),
            order_id: blank_to_none(self.order_id),
            emergency: self.emergency,
        }
    }
}

#[derive(Deserialize)]
pub struct MyReportsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub(crate) fn report_json(state: &DailyReportState) -> Result<Json<Value>, ApiError> {
    let report = state
        .report
        .as_ref()
        .ok_or_else(|| ApiError::Internal(anyhow!("report missing after write")))?;
    success("report", DailyReportView::from(report))
}

async fn ensure_order(state: &AppState, draft: &ReportDraft) -> Result<(), ApiError> {
    let Some(order_id) = &draft.order_id else {
        return Ok(());
    };
    match state.order_queries.find(order_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::BadRequest(format!("unknown order {order_id}"))),
    }
}

pub async fn list_mine(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<MyReportsQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::SubmitReports)?;
    let Query(query) = query?;
    let filter = DailyReportFilter {
        user_id: Some(current.id().to_string()),
        status: None,
        from: query.from,
        to: query.to,
    };
    success("reports", state.daily_report_queries.list(&filter).await?)
}

pub async fn submit(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<ReportBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::SubmitReports)?;
    let Json(body) = body?;
    let today = state.clock.today();
    let draft = body.into_draft(today);
    ensure_order(&state, &draft).await?;

    let report_id = Uuid::now_v7().to_string();
    let command = DailyReportCommand::Submit {
        report_id: report_id.clone(),
        user_id: current.id().to_string(),
        draft,
        at: state.clock.now(),
        today,
    };
    let stream = stream_id(&report_id);
    let report = state.daily_reports.handle(&stream, command).await?;
    tracing::info!(%report_id, user_id = %current.id(), "daily report submitted");
    Ok((StatusCode::CREATED, report_json(&report)?))
}

/// Rewrites a pending report inside the correction window.
pub async fn correct(
    State(state): State<AppState>,
    current: CurrentUser,
    report_id: Result<Path<String>, PathRejection>,
    body: Result<Json<ReportBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::SubmitReports)?;
    let Path(report_id) = report_id?;
    let Json(body) = body?;
    let today = state.clock.today();
    let draft = body.into_draft(today);
    ensure_order(&state, &draft).await?;

    let command = DailyReportCommand::Correct {
        by: current.id().to_string(),
        draft,
        at: state.clock.now(),
        today,
    };
    let stream = stream_id(&report_id);
    let report = state.daily_reports.handle(&stream, command).await?;
    tracing::info!(%report_id, user_id = %current.id(), "daily report corrected");
    report_json(&report)
}
