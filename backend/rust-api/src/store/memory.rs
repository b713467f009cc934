use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{InterviewSession, User};

use super::Store;

/// In-process fallback backend for local development, used when no document
/// store is configured. A single owned instance lives in `AppState`; data
/// does not survive a restart.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    interviews: RwLock<HashMap<String, InterviewSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn put_user(&self, user: &User) -> Result<()> {
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn put_interview(&self, interview: &InterviewSession) -> Result<()> {
        self.interviews
            .write()
            .await
            .insert(interview.id.clone(), interview.clone());
        Ok(())
    }

    async fn get_interview(&self, id: &str) -> Result<Option<InterviewSession>> {
        Ok(self.interviews.read().await.get(id).cloned())
    }

    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<InterviewSession>> {
        Ok(self
            .interviews
            .read()
            .await
            .values()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
