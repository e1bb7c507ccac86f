use crate::modules::time_tracking::core::commands::TimeSheetCommand;
use crate::modules::time_tracking::core::decider::stream_id;
use crate::modules::time_tracking::core::projections::time_entry_view;
use crate::modules::time_tracking::core::state::EntryStatus;
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::shared::core::access::Permission;
use crate::shared::core::approval::Verdict;
use crate::shell::response::{ApiError, success};
use crate::shell::review::parse_review;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use anyhow::anyhow;
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
    pub status: Option<EntryStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Every employee's entries; `status=pending` gives the review queue.
pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<ReviewQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ReviewTimeEntries)?;
    let Query(query) = query?;
    let filter = TimeEntryFilter {
        user_id: query.user_id,
        status: query.status,
        from: query.from,
        to: query.to,
    };
    success("entries", state.time_entries.list(&filter).await?)
}

async fn decide_entry(
    state: AppState,
    current: CurrentUser,
    entry_id: Result<Path<String>, PathRejection>,
    body: Bytes,
    verdict: Verdict,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ReviewTimeEntries)?;
    let Path(entry_id) = entry_id?;
    let review = parse_review(&body, verdict, &current, state.clock.now())?;

    let owner = state
        .time_entries
        .find(&entry_id)
        .await?
        .map(|view| view.user_id)
        .ok_or_else(|| ApiError::NotFound(format!("time entry {entry_id} not found")))?;

    let sheet = state
        .time_sheets
        .handle(
            &stream_id(&owner),
            TimeSheetCommand::ReviewEntry {
                entry_id: entry_id.clone(),
                review,
            },
        )
        .await?;
    let entry = sheet
        .entries
        .get(&entry_id)
        .ok_or_else(|| ApiError::Internal(anyhow!("entry {entry_id} missing after review")))?;
    tracing::info!(%entry_id, ?verdict, by = %current.id(), "time entry reviewed");
    success(
        "entry",
        time_entry_view(entry, state.time_sheets.decider().calculator()),
    )
}

pub async fn approve(
    State(state): State<AppState>,
    current: CurrentUser,
    entry_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    decide_entry(state, current, entry_id, body, Verdict::Approve).await
}

pub async fn reject(
    State(state): State<AppState>,
    current: CurrentUser,
    entry_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    decide_entry(state, current, entry_id, body, Verdict::Reject).await
}

#[cfg(test)]
mod review_time_entries_http_inbound_tests {
    use crate::shared::core::access::Role;
    use crate::tests::fixtures::app::TestApp;
    use axum::http::{Method, StatusCode};
    use rstest::rstest;
    use serde_json::json;

    const PENDING: &str = "/api/meister/time-entries?status=pending";

    /// Returns the entry id and the author's cookie.
    async fn recorded_entry(app: &TestApp) -> (String, String) {
        let monteur = app.sign_in(Role::Monteur).await;
        let created = app
            .post(
                "/api/monteur/time-entries",
                &monteur,
                json!({ "date": "2026-10-13", "clock_in": "08:00", "clock_out": "16:30" }),
            )
            .await
            .json();
        (created["entry"]["id"].as_str().unwrap().to_string(), monteur)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_approve_once_and_refuse_a_second_decision() {
        let app = TestApp::new();
        let (id, _) = recorded_entry(&app).await;
        let meister = app.sign_in(Role::Meister).await;

        let queue = app.get(PENDING, &meister).await;
        assert_eq!(queue.json()["entries"].as_array().unwrap().len(), 1);

        let uri = format!("/api/meister/time-entries/{id}/approve");
        let approved = app
            .send(Method::POST, &uri, Some(meister.as_str()), None)
            .await;
        assert_eq!(approved.status, StatusCode::OK);
        assert_eq!(approved.json()["entry"]["status"], "approved");
        assert_eq!(approved.json()["entry"]["approved_by"], "meister-0001");

        let again = app.post(&uri, &meister, json!({})).await;
        assert_eq!(again.status, StatusCode::CONFLICT);

        let reject = app
            .post(
                &format!("/api/meister/time-entries/{id}/reject"),
                &meister,
                json!({ "comment": "zu spaet" }),
            )
            .await;
        assert_eq!(reject.status, StatusCode::CONFLICT);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_lock_approved_entries_for_the_employee() {
        let app = TestApp::new();
        let (id, monteur) = recorded_entry(&app).await;
        let meister = app.sign_in(Role::Meister).await;
        let uri = format!("/api/meister/time-entries/{id}/approve");
        app.post(&uri, &meister, json!({})).await;

        let deleted = app
            .delete(&format!("/api/monteur/time-entries/{id}"), &monteur)
            .await;
        assert_eq!(deleted.status, StatusCode::CONFLICT);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_office_out_of_reviews() {
        let app = TestApp::new();
        let (id, _) = recorded_entry(&app).await;
        let other = app.sign_in(Role::Buero).await;
        let uri = format!("/api/meister/time-entries/{id}/approve");
        let response = app.post(&uri, &other, json!({})).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_404_for_unknown_entries() {
        let app = TestApp::new();
        let meister = app.sign_in(Role::Meister).await;
        let uri = "/api/meister/time-entries/te-404/approve";
        let response = app.post(uri, &meister, json!({})).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_let_a_supervisor_approve_their_own_entry() {
        let app = TestApp::new();
        let meister = app.sign_in(Role::Meister).await;
        let created = app
            .post(
                "/api/monteur/time-entries",
                &meister,
                json!({ "date": "2026-10-13", "clock_in": "06:00", "clock_out": "20:00" }),
            )
            .await
            .json();
        let id = created["entry"]["id"].as_str().unwrap();

        let uri = format!("/api/meister/time-entries/{id}/approve");
        let response = app.post(&uri, &meister, json!({})).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        let listed = app.get(PENDING, &meister).await;
        assert_eq!(listed.json()["entries"].as_array().unwrap().len(), 1);
    }
}
