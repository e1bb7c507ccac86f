use crate::modules::identity::core::password::verify_password;
use crate::modules::identity::core::session::{Session, clear_cookie};
use crate::modules::identity::core::user::{IdentityError, UserView};
use crate::shell::response::{ApiError, done, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use chrono::Duration;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let email = body.email.trim().to_lowercase();

    // Unknown email, wrong password and inactive account look the same.
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .filter(|user| user.active && verify_password(&body.password, &user.password_hash))
        .ok_or_else(|| {
            tracing::warn!(%email, "login refused");
            ApiError::Unauthorized(IdentityError::InvalidCredentials.to_string())
        })?;

    let session = Session::start(
        &user.id,
        user.role,
        state.clock.now(),
        Duration::hours(state.config.session_ttl_hours),
    );
    let cookie = session.set_cookie();
    state.sessions.create(session).await?;
    tracing::info!(user_id = %user.id, role = %user.role, "signed in");

    let body = success("user", UserView::from(&user))?;
    Ok(([(SET_COOKIE, cookie)], body))
}

pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    state.sessions.delete(&current.session_id).await?;
    tracing::info!(user_id = %current.id(), "signed out");
    Ok(([(SET_COOKIE, clear_cookie())], done("signed out")))
}

pub async fn me(current: CurrentUser) -> Result<Json<serde_json::Value>, ApiError> {
    success("user", UserView::from(&current.user))
}

#[cfg(test)]
mod sign_in_http_inbound_tests {
    use crate::shared::core::access::Role;
    use crate::tests::fixtures::app::TestApp;
    use crate::tests::fixtures::users::{PASSWORD, UserBuilder};
    use axum::http::{Method, StatusCode};
    use rstest::rstest;
    use serde_json::json;

    async fn app_with_user() -> TestApp {
        let app = TestApp::new();
        app.state
            .users
            .insert(UserBuilder::new().role(Role::Meister).build())
            .await
            .unwrap();
        app
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_set_a_session_cookie_on_valid_credentials() {
        let app = app_with_user().await;
        let credentials = json!({ "email": "Monteur@Lift-Service.de", "password": PASSWORD });
        let response = app
            .send(Method::POST, "/api/auth/login", None, Some(credentials))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        let cookie = response.set_cookie.clone().unwrap();
        assert!(cookie.starts_with("session="));
        assert!(cookie.contains("HttpOnly"));
        let body = response.json();
        assert_eq!(body["user"]["role"], "Meister");
        assert!(body["user"].get("password_hash").is_none());

        let session = cookie.split(';').next().unwrap();
        let me = app.get("/api/auth/me", session).await;
        assert_eq!(me.status, StatusCode::OK);
        assert_eq!(me.json()["user"]["email"], "monteur@lift-service.de");
    }

    #[rstest]
    #[case("monteur@lift-service.de", "wrong-password")]
    #[case("nobody@lift-service.de", PASSWORD)]
    #[tokio::test]
    async fn it_should_return_401_on_bad_credentials(#[case] email: &str, #[case] password: &str) {
        let app = app_with_user().await;
        let response = app
            .send(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["success"], false);
        assert!(response.set_cookie.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_inactive_accounts() {
        let app = TestApp::new();
        app.state
            .users
            .insert(UserBuilder::new().inactive().build())
            .await
            .unwrap();
        let credentials = json!({ "email": "monteur@lift-service.de", "password": PASSWORD });
        let response = app
            .send(Method::POST, "/api/auth/login", None, Some(credentials))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_end_the_session_on_logout() {
        let app = TestApp::new();
        let cookie = app.sign_in(Role::Monteur).await;

        let response = app.post("/api/auth/logout", &cookie, json!({})).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.set_cookie.unwrap().contains("Max-Age=0"));

        let me = app.get("/api/auth/me", &cookie).await;
        assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_expire_sessions_after_the_ttl() {
        let app = TestApp::new();
        let cookie = app.sign_in(Role::Monteur).await;
        app.set_time("2026-10-14 20:00");
        let me = app.get("/api/auth/me", &cookie).await;
        assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    }
}
