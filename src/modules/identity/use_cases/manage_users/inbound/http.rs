use crate::modules::identity::core::password::hash_password;
use crate::modules::identity::core::user::{
    IdentityError, User, UserView, normalize_email, validate_registration,
};
use crate::shared::core::access::{Permission, Role, UnknownRole};
use crate::shell::response::{ApiError, success};
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateUserBody {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct ChangeRoleBody {
    pub role: String,
}

#[derive(Deserialize)]
pub struct SetActiveBody {
    pub active: bool,
}

fn parse_role(value: &str) -> Result<Role, ApiError> {
    value
        .parse()
        .map_err(|e: UnknownRole| ApiError::BadRequest(e.to_string()))
}

pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageUsers)?;
    let users: Vec<UserView> = state
        .users
        .list()
        .await?
        .iter()
        .map(UserView::from)
        .collect();
    success("users", users)
}

pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    body: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    current.require(Permission::ManageUsers)?;
    let Json(body) = body?;
    let email = normalize_email(&body.email).map_err(ApiError::rejected)?;
    validate_registration(&body.name, &body.password).map_err(ApiError::rejected)?;
    let role = parse_role(&body.role)?;

    let user = User {
        id: Uuid::now_v7().to_string(),
        email,
        name: body.name.trim().to_string(),
        role,
        active: true,
        password_hash: hash_password(&body.password),
        created_at: state.clock.now(),
    };
    let view = UserView::from(&user);
    state.users.insert(user).await?;
    tracing::info!(user_id = %view.id, role = %view.role, by = %current.id(), "user created");
    Ok((StatusCode::CREATED, success("user", view)?))
}

async fn load_other(
    state: &AppState,
    current: &CurrentUser,
    user_id: &str,
) -> Result<User, ApiError> {
    if user_id == current.id() {
        return Err(ApiError::rejected(IdentityError::SelfModification));
    }
    state
        .users
        .find(user_id)
        .await?
        .ok_or_else(|| ApiError::rejected(IdentityError::UserNotFound(user_id.to_string())))
}

pub async fn change_role(
    State(state): State<AppState>,
    current: CurrentUser,
    user_id: Result<Path<String>, PathRejection>,
    body: Result<Json<ChangeRoleBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageUsers)?;
    let Path(user_id) = user_id?;
    let Json(body) = body?;
    let role = parse_role(&body.role)?;

    let mut user = load_other(&state, &current, &user_id).await?;
    user.role = role;
    let view = UserView::from(&user);
    state.users.update(user).await?;
    tracing::info!(%user_id, %role, by = %current.id(), "role changed");
    success("user", view)
}

pub async fn set_active(
    State(state): State<AppState>,
    current: CurrentUser,
    user_id: Result<Path<String>, PathRejection>,
    body: Result<Json<SetActiveBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    current.require(Permission::ManageUsers)?;
    let Path(user_id) = user_id?;
    let Json(body) = body?;

    let mut user = load_other(&state, &current, &user_id).await?;
    user.active = body.active;
    let view = UserView::from(&user);
    state.users.update(user).await?;
    if !body.active {
        state.sessions.delete_for_user(&user_id).await?;
    }
    tracing::info!(%user_id, active = body.active, by = %current.id(), "activation changed");
    success("user", view)
}
