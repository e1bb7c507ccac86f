use crate::modules::identity::core::session::session_id_from_cookies;
use crate::modules::identity::core::user::User;
use crate::shared::core::access::{Permission, Role};
use crate::shared::core::approval::Reviewer;
use crate::shell::response::ApiError;
use crate::shell::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;

/// The signed-in user behind a request. Extracting it fails with 401 when
/// there is no valid session; there is no anonymous or default role.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub session_id: String,
    pub user: User,
}

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn require(&self, permission: Permission) -> Result<(), ApiError> {
        if self.user.role.can(permission) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(format!(
                "role {} lacks permission {permission:?}",
                self.user.role
            )))
        }
    }

    pub fn reviewer(&self) -> Reviewer {
        Reviewer {
            user_id: self.user.id.clone(),
            role: self.user.role,
        }
    }
}

fn session_token(parts: &Parts) -> Option<String> {
    let from_cookie = parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(session_id_from_cookies)
        .map(str::to_string);
    from_cookie.or_else(|| {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, ApiError> {
        let token =
            session_token(parts).ok_or_else(|| ApiError::Unauthorized("not signed in".into()))?;
        let session = state
            .sessions
            .find(&token, state.clock.now())
            .await?
            .ok_or_else(|| ApiError::Unauthorized("session expired or unknown".into()))?;
        let user = state
            .users
            .find(&session.user_id)
            .await?
            .filter(|user| user.active)
            .ok_or_else(|| ApiError::Unauthorized("account is not active".into()))?;
        Ok(CurrentUser {
            session_id: session.id,
            user,
        })
    }
}
