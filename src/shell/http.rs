use crate::modules::absences::use_cases::{request_absence, review_absences};
use crate::modules::customers::use_cases::manage_customers;
use crate::modules::daily_reports::use_cases::{review_daily_reports, submit_daily_reports};
use crate::modules::exports::use_cases::download_exports;
use crate::modules::identity::use_cases::{manage_users, sign_in};
use crate::modules::orders::use_cases::{dispatch_orders, work_orders};
use crate::modules::payroll::use_cases::premium_pay;
use crate::modules::time_tracking::use_cases::{clock, manage_time_entries, review_time_entries};
use crate::shell::graphql::{self, AppSchema};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    current: CurrentUser,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(current)).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

fn monteur_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/time-entries",
            get(manage_time_entries::inbound::http::list)
                .post(manage_time_entries::inbound::http::create),
        )
        .route(
            "/time-entries/{id}",
            put(manage_time_entries::inbound::http::update)
                .delete(manage_time_entries::inbound::http::delete),
        )
        .route("/clock-in", post(clock::inbound::http::clock_in))
        .route("/clock-out", post(clock::inbound::http::clock_out))
        .route("/break-start", post(clock::inbound::http::break_start))
        .route("/break-end", post(clock::inbound::http::break_end))
        .route("/clock-status", get(clock::inbound::http::status))
        .route("/orders", get(work_orders::inbound::http::list_mine))
        .route(
            "/orders/{id}/start",
            post(work_orders::inbound::http::start),
        )
        .route(
            "/orders/{id}/complete",
            post(work_orders::inbound::http::complete),
        )
        .route(
            "/absences",
            get(request_absence::inbound::http::list_mine)
                .post(request_absence::inbound::http::request),
        )
        .route(
            "/absences/{id}",
            axum::routing::delete(request_absence::inbound::http::withdraw),
        )
        .route(
            "/daily-reports",
            get(submit_daily_reports::inbound::http::list_mine)
                .post(submit_daily_reports::inbound::http::submit),
        )
        .route(
            "/daily-reports/{id}",
            put(submit_daily_reports::inbound::http::correct),
        )
}

fn meister_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/time-entries",
            get(review_time_entries::inbound::http::list),
        )
        .route(
            "/time-entries/{id}/approve",
            post(review_time_entries::inbound::http::approve),
        )
        .route(
            "/time-entries/{id}/reject",
            post(review_time_entries::inbound::http::reject),
        )
        .route("/absences", get(review_absences::inbound::http::list))
        .route(
            "/absences/{id}/approve",
            post(review_absences::inbound::http::approve),
        )
        .route(
            "/absences/{id}/reject",
            post(review_absences::inbound::http::reject),
        )
        .route(
            "/daily-reports",
            get(review_daily_reports::inbound::http::list),
        )
        .route(
            "/daily-reports/{id}/approve",
            post(review_daily_reports::inbound::http::approve),
        )
        .route(
            "/daily-reports/{id}/reject",
            post(review_daily_reports::inbound::http::reject),
        )
}

fn buero_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(dispatch_orders::inbound::http::list)
                .post(dispatch_orders::inbound::http::create),
        )
        .route("/orders/{id}", get(dispatch_orders::inbound::http::get))
        .route(
            "/orders/{id}/assign",
            put(dispatch_orders::inbound::http::assign),
        )
        .route(
            "/orders/{id}/schedule",
            put(dispatch_orders::inbound::http::schedule),
        )
        .route(
            "/orders/{id}/cancel",
            post(dispatch_orders::inbound::http::cancel),
        )
        .route(
            "/emergencies",
            get(dispatch_orders::inbound::http::list_emergencies)
                .post(dispatch_orders::inbound::http::create_emergency),
        )
        .route(
            "/customers",
            get(manage_customers::inbound::http::list)
                .post(manage_customers::inbound::http::create),
        )
        .route(
            "/customers/{id}",
            get(manage_customers::inbound::http::get)
                .put(manage_customers::inbound::http::update)
                .delete(manage_customers::inbound::http::delete),
        )
}

fn export_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/time-entries.csv",
            get(download_exports::inbound::http::time_entries),
        )
        .route("/orders.csv", get(download_exports::inbound::http::orders))
        .route(
            "/absences.csv",
            get(download_exports::inbound::http::absences),
        )
        .route(
            "/daily-reports.csv",
            get(download_exports::inbound::http::daily_reports),
        )
        .route(
            "/premium-pay.csv",
            get(download_exports::inbound::http::premium_pay),
        )
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    let origin = match origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(error) => {
            tracing::warn!(%origin, %error, "ignoring invalid CORS origin");
            return None;
        }
    };
    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION])
            .allow_credentials(true),
    )
}

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(sign_in::inbound::http::login))
        .route("/api/auth/logout", post(sign_in::inbound::http::logout))
        .route("/api/auth/me", get(sign_in::inbound::http::me))
        .route(
            "/api/admin/users",
            get(manage_users::inbound::http::list)
                .post(manage_users::inbound::http::create),
        )
        .route(
            "/api/admin/users/{id}/role",
            put(manage_users::inbound::http::change_role),
        )
        .route(
            "/api/admin/users/{id}/active",
            put(manage_users::inbound::http::set_active),
        )
        .nest("/api/monteur", monteur_routes())
        .nest("/api/meister", meister_routes())
        .nest("/api/buero", buero_routes())
        .route(
            "/api/lohnbuchhaltung/premium-pay",
            get(premium_pay::inbound::http::premium_pay),
        )
        .nest("/api/export", export_routes())
        .route("/gql", get(graphiql).post(graphql_handler))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http());

    let origin = state.config.cors_allowed_origin.as_deref();
    let app = match origin.and_then(cors_layer) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    app.with_state(state)
}
