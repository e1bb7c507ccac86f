use crate::modules::identity::core::session::Session;
use crate::modules::identity::core::user::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("email {0} is already registered")]
    EmailTaken(String),

    #[error("user {0} not found")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> Result<(), UserStoreError>;
    async fn update(&self, user: User) -> Result<(), UserStoreError>;
    async fn find(&self, user_id: &str) -> Result<Option<User>, UserStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
    /// All users, oldest first.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: Session) -> anyhow::Result<()>;
    /// The session, unless it is unknown or expired at `now`.
    async fn find(&self, session_id: &str, now: DateTime<Utc>) -> anyhow::Result<Option<Session>>;
    async fn delete(&self, session_id: &str) -> anyhow::Result<()>;
    async fn delete_for_user(&self, user_id: &str) -> anyhow::Result<()>;
}
