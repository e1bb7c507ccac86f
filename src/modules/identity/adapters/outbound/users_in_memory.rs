use crate::modules::identity::core::ports::{UserRepository, UserStoreError};
use crate::modules::identity::core::user::User;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
    is_offline: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), UserStoreError> {
        if self.is_offline {
            return Err(UserStoreError::Backend("User repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<(), UserStoreError> {
        self.check_online()?;
        let mut guard = self.users.write().await;
        if guard.values().any(|u| u.email == user.email) {
            return Err(UserStoreError::EmailTaken(user.email));
        }
        guard.insert(user.id.clone(), user);
        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), UserStoreError> {
        self.check_online()?;
        let mut guard = self.users.write().await;
        if guard
            .values()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(UserStoreError::EmailTaken(user.email));
        }
        match guard.get_mut(&user.id) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(UserStoreError::NotFound(user.id)),
        }
    }

    async fn find(&self, user_id: &str) -> Result<Option<User>, UserStoreError> {
        self.check_online()?;
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        self.check_online()?;
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        self.check_online()?;
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
        Ok(users)
    }
}
