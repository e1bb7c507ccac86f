use crate::config::Config;
use crate::modules::identity::use_cases::manage_users::seed_admin::seed_admin;
use crate::shared::core::access::Role;
use crate::tests::fixtures::app::TestApp;
use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::json;

async fn login(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    let cookie = response.set_cookie.unwrap();
    cookie.split(';').next().unwrap().to_string()
}

#[rstest]
#[tokio::test]
async fn it_should_carry_a_workday_from_clock_in_to_export() {
    let config = Config {
        admin_email: Some("chef@lift-service.de".into()),
        admin_password: Some("chef-passwort".into()),
        ..Config::default()
    };
    let app = TestApp::with_config(config, "2026-10-14 07:30");
    let users = app.state.users.as_ref();
    seed_admin(users, &app.state.config, app.state.clock.now())
        .await
        .unwrap()
        .unwrap();

    let admin = login(&app, "chef@lift-service.de", "chef-passwort").await;
    let created = app
        .post(
            "/api/admin/users",
            &admin,
            json!({
                "email": "lena@lift-service.de",
                "name": "Lena Lift",
                "password": "schacht-2026",
                "role": "Monteur"
            }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let monteur_id = created.json()["user"]["id"].as_str().unwrap().to_string();

    let buero = app.sign_in(Role::Buero).await;
    let order = app
        .post(
            "/api/buero/orders",
            &buero,
            json!({ "title": "Jahreswartung Haus 3", "assigned_to": monteur_id }),
        )
        .await
        .json();
    let order_id = order["order"]["id"].as_str().unwrap().to_string();

    let monteur = login(&app, "lena@lift-service.de", "schacht-2026").await;
    app.set_time("2026-10-14 08:00");
    assert_eq!(
        app.stamp("clock-in", &monteur).await.status,
        StatusCode::CREATED
    );
    let start = format!("orders/{order_id}/start");
    app.stamp(&start, &monteur).await;

    app.set_time("2026-10-14 12:00");
    app.stamp("break-start", &monteur).await;
    app.set_time("2026-10-14 12:30");
    app.stamp("break-end", &monteur).await;

    app.set_time("2026-10-14 16:30");
    let complete = format!("orders/{order_id}/complete");
    app.stamp(&complete, &monteur).await;
    let clocked_out = app.stamp("clock-out", &monteur).await.json();
    let entry = &clocked_out["entry"];
    assert_eq!(entry["total_hours"], "08:00");
    assert_eq!(entry["status"], "pending");
    let entry_id = entry["id"].as_str().unwrap().to_string();

    let report = app
        .post(
            "/api/monteur/daily-reports",
            &monteur,
            json!({ "description": "Jahreswartung", "hours": 8, "order_id": order_id }),
        )
        .await;
    assert_eq!(report.status, StatusCode::CREATED);

    let meister = app.sign_in(Role::Meister).await;
    let pending = "/api/meister/time-entries?status=pending";
    let queue = app.get(pending, &meister).await.json();
    assert_eq!(queue["entries"].as_array().unwrap().len(), 1);
    let approved = app
        .post(
            &format!("/api/meister/time-entries/{entry_id}/approve"),
            &meister,
            json!({ "comment": "passt" }),
        )
        .await
        .json();
    assert_eq!(approved["entry"]["status"], "approved");
    assert_eq!(approved["entry"]["approved_by"], "meister-0001");

    let export = app.get("/api/export/time-entries.csv", &buero).await;
    assert_eq!(export.status, StatusCode::OK);
    let rows: Vec<&str> = export.text.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].contains(&entry_id));
    assert!(rows[1].contains("approved"));

    let orders = app.get("/api/buero/orders", &buero).await.json();
    assert_eq!(orders["orders"][0]["status"], "completed");
}

#[rstest]
#[tokio::test]
async fn it_should_end_access_on_logout() {
    let app = TestApp::new();
    let monteur = app.sign_in(Role::Monteur).await;
    let cookie = Some(monteur.as_str());
    app.send(Method::POST, "/api/auth/logout", cookie, None)
        .await;
    let response = app.stamp("clock-in", &monteur).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
