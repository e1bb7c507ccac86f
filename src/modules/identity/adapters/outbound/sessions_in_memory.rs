use crate::modules::identity::core::ports::SessionStore;
use crate::modules::identity::core::session::Session;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    is_offline: bool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Session store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    /// Also drops every session already expired when the new one starts.
    async fn create(&self, session: Session) -> anyhow::Result<()> {
        self.check_online()?;
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, existing| !existing.is_expired(session.created_at));
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn find(&self, session_id: &str, now: DateTime<Utc>) -> anyhow::Result<Option<Session>> {
        self.check_online()?;
        let session = self.sessions.read().await.get(session_id).cloned();
        match session {
            Some(session) if session.is_expired(now) => {
                self.sessions.write().await.remove(session_id);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn delete(&self, session_id: &str) -> anyhow::Result<()> {
        self.check_online()?;
        self.sessions.write().await.remove(session_id);
        Ok(())
    }

    async fn delete_for_user(&self, user_id: &str) -> anyhow::Result<()> {
        self.check_online()?;
        self.sessions
            .write()
            .await
            .retain(|_, session| session.user_id != user_id);
        Ok(())
    }
}
