use crate::modules::customers::core::customer::{Customer, CustomerDetails, CustomerError};
use crate::shared::core::access::Permission;
use crate::shell::response::{ApiError, done, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;

fn not_found(customer_id: &str) -> ApiError {
    ApiError::rejected(CustomerError::NotFound(customer_id.to_string()))
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageCustomers)?;
    success("customers", state.customers.list().await?)
}

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<CustomerDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::ManageCustomers)?;
    let Json(details) = body?;
    let customer = Customer::create(Uuid::now_v7().to_string(), details, state.clock.now())
        .map_err(ApiError::rejected)?;
    state.customers.save(customer.clone()).await?;
    tracing::info!(customer_id = %customer.id, by = %current.id(), "customer created");
    Ok((StatusCode::CREATED, success("customer", customer)?))
}

pub async fn get(
    State(state): State<AppState>,
    current: CurrentUser,
    customer_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageCustomers)?;
    let Path(customer_id) = customer_id?;
    let customer = state
        .customers
        .find(&customer_id)
        .await?
        .ok_or_else(|| not_found(&customer_id))?;
    success("customer", customer)
}

pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    customer_id: Result<Path<String>, PathRejection>,
    body: Result<Json<CustomerDetails>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageCustomers)?;
    let Path(customer_id) = customer_id?;
    let Json(details) = body?;
    let mut customer = state
        .customers
        .find(&customer_id)
        .await?
        .ok_or_else(|| not_found(&customer_id))?;
    customer.apply(details).map_err(ApiError::rejected)?;
    state.customers.save(customer.clone()).await?;
    success("customer", customer)
}

pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    customer_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageCustomers)?;
    let Path(customer_id) = customer_id?;
    if !state.customers.delete(&customer_id).await? {
        return Err(not_found(&customer_id));
    }
    tracing::info!(%customer_id, by = %current.id(), "customer deleted");
    Ok(done("customer deleted"))
}
