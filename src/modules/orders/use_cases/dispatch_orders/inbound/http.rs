// Office side of orders: create, assign, reschedule, cancel, and the
// emergency (Notdienst) desk.

use crate::modules::orders::core::commands::OrderCommand;
use crate::modules::orders::core::decider::stream_id;
use crate::modules::orders::core::projections::OrderView;
use crate::modules::orders::core::state::{
    OrderDetails, OrderState, OrderStatus, OrderType, Priority,
};
use crate::modules::orders::use_cases::list_orders::queries_port::OrderFilter;
use crate::shared::core::access::Permission;
use crate::shell::response::{ApiError, success};
use crate::shell::review::optional_json;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use anyhow::anyhow;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateOrderBody {
    #[serde(default)]
    pub order_type: Option<OrderType>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub planned_start: Option<NaiveDateTime>,
    #[serde(default)]
    pub planned_end: Option<NaiveDateTime>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

#[derive(Deserialize)]
pub struct AssignBody {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct ScheduleBody {
    #[serde(default)]
    pub planned_start: Option<NaiveDateTime>,
    #[serde(default)]
    pub planned_end: Option<NaiveDateTime>,
}

#[derive(Deserialize, Default)]
pub struct CancelBody {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    pub assigned_to: Option<String>,
}

pub(crate) fn order_json(state: &OrderState) -> Result<Json<Value>, ApiError> {
    let order = state
        .order
        .as_ref()
        .ok_or_else(|| ApiError::Internal(anyhow!("order missing after write")))?;
    success("order", OrderView::from(order))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

async fn ensure_customer(state: &AppState, customer_id: Option<&str>) -> Result<(), ApiError> {
    let Some(customer_id) = customer_id else {
        return Ok(());
    };
    match state.customers.find(customer_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::BadRequest(format!("unknown customer {customer_id}"))),
    }
}

/// Orders go to active users who work orders.
async fn ensure_technician(state: &AppState, user_id: &str) -> Result<(), ApiError> {
    match state.users.find(user_id).await? {
        Some(user) if user.active && user.role.can(Permission::WorkOrders) => Ok(()),
        Some(_) => Err(ApiError::BadRequest(format!("user {user_id} cannot take orders"))),
        None => Err(ApiError::BadRequest(format!("unknown user {user_id}"))),
    }
}

async fn create_order(
    state: &AppState,
    current: &CurrentUser,
    body: CreateOrderBody,
    order_type: OrderType,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let customer_id = non_blank(body.customer_id);
    ensure_customer(state, customer_id.as_deref()).await?;
    let assigned_to = non_blank(body.assigned_to);
    if let Some(user_id) = &assigned_to {
        ensure_technician(state, user_id).await?;
    }

    let order_id = Uuid::now_v7().to_string();
    let command = OrderCommand::Create {
        order_id: order_id.clone(),
        details: OrderDetails {
            order_type,
            title: body.title,
            description: non_blank(body.description),
            customer_id,
            location: non_blank(body.location),
            priority: body.priority,
            planned_start: body.planned_start,
            planned_end: body.planned_end,
        },
        assigned_to,
        created_by: current.id().to_string(),
        at: state.clock.now(),
    };
    let order = state.orders.handle(&stream_id(&order_id), command).await?;
    let kind = order_type.as_str();
    tracing::info!(%order_id, order_type = kind, by = %current.id(), "order created");
    Ok((StatusCode::CREATED, order_json(&order)?))
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    query: Result<Query<OrderQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ViewOrders)?;
    let Query(query) = query?;
    let filter = OrderFilter {
        assigned_to: query.assigned_to,
        status: query.status,
        emergencies_only: false,
    };
    success("orders", state.order_queries.list(&filter).await?)
}

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::ManageOrders)?;
    let Json(body) = body?;
    let order_type = body.order_type.unwrap_or(OrderType::Maintenance);
    create_order(&state, &current, body, order_type).await
}

pub async fn get(
    State(state): State<AppState>,
    current: CurrentUser,
    order_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ViewOrders)?;
    let Path(order_id) = order_id?;
    let order = state
        .order_queries
        .find(&order_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("order {order_id} not found")))?;
    success("order", order)
}

pub async fn assign(
    State(state): State<AppState>,
    current: CurrentUser,
    order_id: Result<Path<String>, PathRejection>,
    body: Result<Json<AssignBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageOrders)?;
    let Path(order_id) = order_id?;
    let Json(body) = body?;
    ensure_technician(&state, &body.user_id).await?;
    let command = OrderCommand::Assign {
        user_id: body.user_id,
    };
    let order = state.orders.handle(&stream_id(&order_id), command).await?;
    order_json(&order)
}

pub async fn schedule(
    State(state): State<AppState>,
    current: CurrentUser,
    order_id: Result<Path<String>, PathRejection>,
    body: Result<Json<ScheduleBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageOrders)?;
    let Path(order_id) = order_id?;
    let Json(body) = body?;
    let command = OrderCommand::Reschedule {
        planned_start: body.planned_start,
        planned_end: body.planned_end,
    };
    let order = state.orders.handle(&stream_id(&order_id), command).await?;
    order_json(&order)
}

pub async fn cancel(
    State(state): State<AppState>,
    current: CurrentUser,
    order_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageOrders)?;
    let Path(order_id) = order_id?;
    let body: CancelBody = optional_json(&body)?;
    let command = OrderCommand::Cancel {
        reason: non_blank(body.reason),
        at: state.clock.local_now(),
    };
    let order = state.orders.handle(&stream_id(&order_id), command).await?;
    tracing::info!(%order_id, by = %current.id(), "order cancelled");
    order_json(&order)
}

/// Open and running emergency orders.
pub async fn list_emergencies(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ViewOrders)?;
    let filter = OrderFilter {
        emergencies_only: true,
        ..OrderFilter::default()
    };
    let active: Vec<OrderView> = state
        .order_queries
        .list(&filter)
        .await?
        .into_iter()
        .filter(|order| !order.status.is_closed())
        .collect();
    success("orders", active)
}

pub async fn create_emergency(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::ManageOrders)?;
    let Json(body) = body?;
    create_order(&state, &current, body, OrderType::Emergency).await
}
