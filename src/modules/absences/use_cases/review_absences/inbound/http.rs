use crate::modules::absences::core::commands::AbsenceCommand;
use crate::modules::absences::core::decider::stream_id;
use crate::modules::absences::use_cases::list_absences::queries_port::AbsenceFilter;
use crate::modules::absences::use_cases::request_absence::inbound::http::{absence_json, owner_of};
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
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct ReviewQuery {
    pub user_id: Option<String>,
    pub status: Option<ApprovalStatus>,
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<ReviewQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ReviewAbsences)?;
    let Query(query) = query?;
    let filter = AbsenceFilter {
        user_id: query.user_id,
        status: query.status,
    };
    success("absences", state.absence_queries.list(&filter).await?)
}

async fn decide_absence(
    state: AppState,
    current: CurrentUser,
    absence_id: Result<Path<String>, PathRejection>,
    body: Bytes,
    verdict: Verdict,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ReviewAbsences)?;
    let Path(absence_id) = absence_id?;
    let review = parse_review(&body, verdict, &current, state.clock.now())?;
    let owner = owner_of(&state, &absence_id).await?;
    let command = AbsenceCommand::Review {
        absence_id: absence_id.clone(),
        review,
    };
    let absences = state.absences.handle(&stream_id(&owner), command).await?;
    tracing::info!(%absence_id, ?verdict, by = %current.id(), "absence reviewed");
    absence_json(&absences, &absence_id)
}

pub async fn approve(
    State(state): State<AppState>,
    current: CurrentUser,
    absence_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    decide_absence(state, current, absence_id, body, Verdict::Approve).await
}

pub async fn reject(
    State(state): State<AppState>,
    current: CurrentUser,
    absence_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    decide_absence(state, current, absence_id, body, Verdict::Reject).await
}
