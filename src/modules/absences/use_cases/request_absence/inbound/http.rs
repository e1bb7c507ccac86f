use crate::modules::absences::core::commands::AbsenceCommand;
use crate::modules::absences::core::decider::stream_id;
use crate::modules::absences::core::projections::AbsenceView;
use crate::modules::absences::core::state::{AbsenceState, AbsenceType, DateRange};
use crate::modules::absences::use_cases::list_absences::queries_port::AbsenceFilter;
use crate::shared::core::access::Permission;
use crate::shell::response::{ApiError, done, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use anyhow::anyhow;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct AbsenceBody {
    #[serde(alias = "type")]
    pub absence_type: AbsenceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
}

pub(crate) fn absence_json(
    state: &AbsenceState,
    absence_id: &str,
) -> Result<Json<Value>, ApiError> {
    let absence = state
        .live(absence_id)
        .ok_or_else(|| ApiError::Internal(anyhow!("absence missing after write")))?;
    success("absence", AbsenceView::from(absence))
}

/// Employee whose stream holds the absence.
pub(crate) async fn owner_of(state: &AppState, absence_id: &str) -> Result<String, ApiError> {
    state
        .absence_queries
        .find(absence_id)
        .await?
        .map(|view| view.user_id)
        .ok_or_else(|| ApiError::NotFound(format!("absence {absence_id} not found")))
}

pub async fn list_mine(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::RequestAbsence)?;
    let filter = AbsenceFilter {
        user_id: Some(current.id().to_string()),
        status: None,
    };
    success("absences", state.absence_queries.list(&filter).await?)
}

pub async fn request(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<AbsenceBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::RequestAbsence)?;
    let Json(body) = body?;

    let absence_id = Uuid::now_v7().to_string();
    let command = AbsenceCommand::Request {
        absence_id: absence_id.clone(),
        user_id: current.id().to_string(),
        absence_type: body.absence_type,
        range: DateRange {
            start: body.start_date,
            end: body.end_date,
        },
        reason: body.reason,
        at: state.clock.now(),
    };
    let stream = stream_id(current.id());
    let absences = state.absences.handle(&stream, command).await?;
    tracing::info!(%absence_id, user_id = %current.id(), "absence requested");
    Ok((StatusCode::CREATED, absence_json(&absences, &absence_id)?))
}

/// Takes back a pending request.
pub async fn withdraw(
    State(state): State<AppState>,
    current: CurrentUser,
    absence_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::RequestAbsence)?;
    let Path(absence_id) = absence_id?;
    let owner = owner_of(&state, &absence_id).await?;
    state
        .absences
        .handle(
            &stream_id(&owner),
            AbsenceCommand::Withdraw {
                absence_id,
                by: current.id().to_string(),
            },
        )
        .await?;
    Ok(done("absence withdrawn"))
}
