// Stamp clock: clock in and out, breaks, and the current status. All times
// come from the server clock.

use crate::modules::time_tracking::core::commands::TimeSheetCommand;
use crate::modules::time_tracking::core::decider::stream_id;
use crate::modules::time_tracking::core::projections::{TimeEntryView, time_entry_view};
use crate::modules::time_tracking::core::state::{TimeEntry, TimeSheetState};
use crate::shared::core::access::Permission;
use crate::shell::response::{ApiError, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use anyhow::anyhow;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Serialize)]
pub struct ClockStatus {
    pub clocked_in: bool,
    pub on_break: bool,
    pub entry: Option<TimeEntryView>,
}

fn view(state: &AppState, entry: &TimeEntry) -> TimeEntryView {
    time_entry_view(entry, state.time_sheets.decider().calculator())
}

fn open_view(state: &AppState, sheet: &TimeSheetState) -> Result<TimeEntryView, ApiError> {
    sheet
        .open_entry()
        .map(|entry| view(state, entry))
        .ok_or_else(|| ApiError::Internal(anyhow!("no open entry after a break command")))
}

pub async fn clock_in(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let entry_id = Uuid::now_v7().to_string();
    let command = TimeSheetCommand::ClockIn {
        entry_id: entry_id.clone(),
        user_id: current.id().to_string(),
        at: state.clock.local_now(),
    };
    let stream = stream_id(current.id());
    let sheet = state.time_sheets.handle(&stream, command).await?;
    let entry = sheet
        .entries
        .get(&entry_id)
        .ok_or_else(|| ApiError::Internal(anyhow!("entry {entry_id} missing after clock-in")))?;
    tracing::info!(user_id = %current.id(), %entry_id, "clocked in");
    Ok((StatusCode::CREATED, success("entry", view(&state, entry))?))
}

pub async fn clock_out(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let stream = stream_id(current.id());
    let open_id = state
        .time_sheets
        .load(&stream)
        .await?
        .open_entry()
        .map(|entry| entry.id.clone());
    let at = state.clock.local_now();
    let sheet = state
        .time_sheets
        .handle(&stream, TimeSheetCommand::ClockOut { at })
        .await?;
    let entry = open_id
        .and_then(|id| sheet.entries.get(&id))
        .ok_or_else(|| ApiError::Internal(anyhow!("clocked-out entry missing after write")))?;
    tracing::info!(user_id = %current.id(), entry_id = %entry.id, "clocked out");
    success("entry", view(&state, entry))
}

pub async fn break_start(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let at = state.clock.local_now();
    let stream = stream_id(current.id());
    let sheet = state
        .time_sheets
        .handle(&stream, TimeSheetCommand::StartBreak { at })
        .await?;
    success("entry", open_view(&state, &sheet)?)
}

pub async fn break_end(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let at = state.clock.local_now();
    let stream = stream_id(current.id());
    let sheet = state
        .time_sheets
        .handle(&stream, TimeSheetCommand::EndBreak { at })
        .await?;
    success("entry", open_view(&state, &sheet)?)
}

pub async fn status(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::TrackOwnTime)?;
    let sheet = state.time_sheets.load(&stream_id(current.id())).await?;
    let open = sheet.open_entry();
    success(
        "status",
        ClockStatus {
            clocked_in: open.is_some(),
            on_break: open.and_then(TimeEntry::running_break).is_some(),
            entry: open.map(|entry| view(&state, entry)),
        },
    )
}
