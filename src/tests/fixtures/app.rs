// In-process application for HTTP tests: the full router over in-memory
// adapters and a clock the test moves by hand.

use crate::config::Config;
use crate::modules::identity::core::session::{SESSION_COOKIE, Session};
use crate::modules::identity::core::user::User;
use crate::shared::core::access::Role;
use crate::shared::core::clock::Clock;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::time::utc;
use crate::tests::fixtures::users::UserBuilder;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, RwLock};
use tower::ServiceExt;

pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub set_cookie: Option<String>,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap()
    }
}

pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::at("2026-10-14 08:00")
    }

    pub fn at(now: &str) -> Self {
        Self::with_config(Config::default(), now)
    }

    pub fn with_config(config: Config, now: &str) -> Self {
        let clock = Arc::new(ManualClock::new(utc(now)));
        let state = AppState::with_clock(config, clock.clone());
        Self { state, clock }
    }

    pub fn set_time(&self, now: &str) {
        self.clock.set(utc(now));
    }

    /// Stores `user` and opens a session for them. Returns the `Cookie`
    /// header value.
    pub async fn sign_in_as(&self, user: User) -> String {
        let session = Session::start(
            &user.id,
            user.role,
            self.clock.now(),
            Duration::hours(self.state.config.session_ttl_hours),
        );
        self.state.users.insert(user).await.unwrap();
        let cookie = format!("{SESSION_COOKIE}={}", session.id);
        self.state.sessions.create(session).await.unwrap();
        cookie
    }

    /// Signs in a fresh user with `role`, id `<role>-0001`.
    pub async fn sign_in(&self, role: Role) -> String {
        let name = role.as_str().to_lowercase();
        let user = UserBuilder::new()
            .id(format!("{name}-0001"))
            .email(format!("{name}@lift-service.de"))
            .name(format!("{role} Test"))
            .role(role)
            .build();
        self.sign_in_as(user).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = router(self.state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            content_type: headers
                .get(header::CONTENT_TYPE)
                .map(|v| v.to_str().unwrap().to_string()),
            set_cookie: headers
                .get(header::SET_COOKIE)
                .map(|v| v.to_str().unwrap().to_string()),
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(Method::GET, uri, Some(cookie), None).await
    }

    pub async fn post(&self, uri: &str, cookie: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(cookie), Some(body)).await
    }

    pub async fn put(&self, uri: &str, cookie: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(cookie), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, cookie: &str) -> TestResponse {
        self.send(Method::DELETE, uri, Some(cookie), None).await
    }

    /// POSTs an empty body to `/api/monteur/<action>`.
    pub async fn stamp(&self, action: &str, cookie: &str) -> TestResponse {
        let uri = format!("/api/monteur/{action}");
        self.post(&uri, cookie, json!({})).await
    }
}
