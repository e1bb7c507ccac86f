use crate::modules::orders::core::commands::OrderCommand;
use crate::modules::orders::core::decider::stream_id;
use crate::modules::orders::core::state::OrderStatus;
use crate::modules::orders::use_cases::dispatch_orders::inbound::http::order_json;
use crate::modules::orders::use_cases::list_orders::queries_port::OrderFilter;
use crate::shared::core::access::Permission;
use crate::shell::response::{ApiError, success};
use crate::shell::review::optional_json;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct MyOrdersQuery {
    pub status: Option<OrderStatus>,
}

#[derive(Deserialize, Default)]
pub struct CompleteBody {
    #[serde(default)]
    pub note: Option<String>,
}

/// Orders assigned to the signed-in technician.
pub async fn list_mine(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<MyOrdersQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::WorkOrders)?;
    let Query(query) = query?;
    let filter = OrderFilter {
        assigned_to: Some(current.id().to_string()),
        status: query.status,
        emergencies_only: false,
    };
    success("orders", state.order_queries.list(&filter).await?)
}

pub async fn start(
    State(state): State<AppState>,
    current: CurrentUser,
    order_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::WorkOrders)?;
    let Path(order_id) = order_id?;
    let command = OrderCommand::Start {
        by: current.id().to_string(),
        at: state.clock.local_now(),
    };
    let order = state.orders.handle(&stream_id(&order_id), command).await?;
    tracing::info!(%order_id, by = %current.id(), "order started");
    order_json(&order)
}

pub async fn complete(
    State(state): State<AppState>,
    current: CurrentUser,
    order_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::WorkOrders)?;
    let Path(order_id) = order_id?;
    let body: CompleteBody = optional_json(&body)?;
    let command = OrderCommand::Complete {
        by: current.id().to_string(),
        at: state.clock.local_now(),
        note: body
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
    };
    let order = state.orders.handle(&stream_id(&order_id), command).await?;
    tracing::info!(%order_id, by = %current.id(), "order completed");
    order_json(&order)
}
