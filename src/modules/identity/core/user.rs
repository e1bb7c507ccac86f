use crate::shared::core::access::Role;
use crate::shared::core::decider::{Rejection, RejectionKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// What leaves the server about a user. Never carries the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("password must have at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("email {0} is already registered")]
    EmailTaken(String),

    #[error("you cannot change your own role or activation")]
    SelfModification,
}

impl Rejection for IdentityError {
    fn kind(&self) -> RejectionKind {
        match self {
            IdentityError::InvalidEmail(_)
            | IdentityError::EmptyName
            | IdentityError::WeakPassword => RejectionKind::Invalid,
            IdentityError::InvalidCredentials => RejectionKind::Forbidden,
            IdentityError::UserNotFound(_) => RejectionKind::NotFound,
            IdentityError::EmailTaken(_) | IdentityError::SelfModification => {
                RejectionKind::Conflict
            }
        }
    }
}

/// Lower-cases and trims, then checks the address has a local part and a
/// dotted domain.
pub fn normalize_email(email: &str) -> Result<String, IdentityError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(IdentityError::InvalidEmail(email))
    }
}

pub fn validate_registration(name: &str, password: &str) -> Result<(), IdentityError> {
    if name.trim().is_empty() {
        return Err(IdentityError::EmptyName);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(IdentityError::WeakPassword);
    }
    Ok(())
}
