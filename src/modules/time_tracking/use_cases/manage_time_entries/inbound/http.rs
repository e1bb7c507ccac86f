// Manual time entries of the signed-in employee.
//
// Clock values are `HH:MM` or ISO datetimes on `date` (default: today). An
// end before its start rolls over midnight. Breaks are resolved inside the
// work interval.

use crate::modules::time_tracking::core::commands::TimeSheetCommand;
use crate::modules::time_tracking::core::decider::stream_id;
use crate::modules::time_tracking::core::duration::Interval;
use crate::modules::time_tracking::core::projections::time_entry_view;
use crate::modules::time_tracking::core::state::{EntryStatus, TimeSheetState};
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::shared::core::access::Permission;
use crate::shell::response::{ApiError, done, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use anyhow::anyhow;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct BreakBody {
    pub start: String,
    pub end: String,
}

#[derive(Deserialize)]
pub struct EntryBody {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub clock_in: String,
    pub clock_out: String,
    #[serde(default)]
    pub breaks: Vec<BreakBody>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EntryBody {
    fn resolve(&self, today: NaiveDate) -> Result<(Interval, Vec<Interval>), ApiError> {
        let work = Interval::resolve(self.date.unwrap_or(today), &self.clock_in, &self.clock_out)?;
        let breaks = self
            .breaks
            .iter()
            .map(|b| work.resolve_within(&b.start, &b.end))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((work, breaks))
    }

    fn description(&self) -> Option<String> {
        self.description
            .as_ref()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
    }
}

#[derive(Deserialize)]
pub struct EntryQuery {
    pub status: Option<EntryStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

fn entry_json(
    state: &AppState,
    sheet: &TimeSheetState,
    entry_id: &str,
) -> Result<Json<Value>, ApiError> {
    let entry = sheet
        .entries
        .get(entry_id)
        .ok_or_else(|| ApiError::Internal(anyhow!("entry {entry_id} missing after write")))?;
    success(
        "entry",
        time_entry_view(entry, state.time_sheets.decider().calculator()),
    )
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<EntryQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let Query(query) = query?;
    let filter = TimeEntryFilter {
        user_id: Some(current.id().to_string()),
        status: query.status,
        from: query.from,
        to: query.to,
    };
    success("entries", state.time_entries.list(&filter).await?)
}

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<EntryBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let Json(body) = body?;
    let (work, breaks) = body.resolve(state.clock.today())?;

    let entry_id = Uuid::now_v7().to_string();
    let command = TimeSheetCommand::RecordEntry {
        entry_id: entry_id.clone(),
        user_id: current.id().to_string(),
        work,
        breaks,
        description: body.description(),
    };
    let stream = stream_id(current.id());
    let sheet = state.time_sheets.handle(&stream, command).await?;
    tracing::info!(user_id = %current.id(), %entry_id, "time entry recorded");
    Ok((StatusCode::CREATED, entry_json(&state, &sheet, &entry_id)?))
}

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    entry_id: Result<Path<String>, PathRejection>,
    body: Result<Json<EntryBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let Path(entry_id) = entry_id?;
    let Json(body) = body?;
    let (work, breaks) = body.resolve(state.clock.today())?;

    let command = TimeSheetCommand::UpdateEntry {
        entry_id: entry_id.clone(),
        work,
        breaks,
        description: body.description(),
    };
    let stream = stream_id(current.id());
    let sheet = state.time_sheets.handle(&stream, command).await?;
    entry_json(&state, &sheet, &entry_id)
}

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    entry_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let Path(entry_id) = entry_id?;
    let command = TimeSheetCommand::DeleteEntry {
        entry_id: entry_id.clone(),
    };
    let stream = stream_id(current.id());
    state.time_sheets.handle(&stream, command).await?;
    tracing::info!(user_id = %current.id(), %entry_id, "time entry deleted");
    Ok(done("entry deleted"))
}
