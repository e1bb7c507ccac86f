use crate::shared::core::access::Role;
use crate::tests::fixtures::app::TestApp;
use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_open_only_one_entry_for_simultaneous_clock_ins() {
    let app = TestApp::new();
    let monteur = app.sign_in(Role::Monteur).await;
    app.state.time_sheets.event_store().set_delay_append_ms(50);

    let (first, second) = tokio::join!(
        app.stamp("clock-in", &monteur),
        app.stamp("clock-in", &monteur),
    );
    let mut statuses = [first.status, second.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    let entries = app.get("/api/monteur/time-entries", &monteur).await.json();
    assert_eq!(entries["entries"].as_array().unwrap().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_record_one_decision_for_simultaneous_approvals() {
    let app = TestApp::new();
    let monteur = app.sign_in(Role::Monteur).await;
    let meister = app.sign_in(Role::Meister).await;
    let created = app
        .post(
            "/api/monteur/time-entries",
            &monteur,
            json!({ "date": "2026-10-13", "clock_in": "08:00", "clock_out": "16:00" }),
        )
        .await
        .json();
    let uri = format!(
        "/api/meister/time-entries/{}/approve",
        created["entry"]["id"].as_str().unwrap()
    );
    app.state.time_sheets.event_store().set_delay_append_ms(50);

    let (first, second) = tokio::join!(
        app.post(&uri, &meister, json!({})),
        app.post(&uri, &meister, json!({})),
    );
    let mut statuses = [first.status, second.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_accept_only_one_of_two_simultaneous_overlapping_absences() {
    let app = TestApp::new();
    let monteur = app.sign_in(Role::Monteur).await;
    app.state.absences.event_store().set_delay_append_ms(50);

    let vacation = json!({
        "absence_type": "vacation",
        "start_date": "2026-10-19",
        "end_date": "2026-10-23"
    });
    let sick = json!({
        "absence_type": "sick",
        "start_date": "2026-10-21",
        "end_date": "2026-10-21"
    });
    let (first, second) = tokio::join!(
        app.post("/api/monteur/absences", &monteur, vacation),
        app.post("/api/monteur/absences", &monteur, sick),
    );
    let mut statuses = [first.status, second.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);

    let mine = app.get("/api/monteur/absences", &monteur).await.json();
    assert_eq!(mine["absences"].as_array().unwrap().len(), 1);
}
