use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::models::{InterviewSession, User};

use super::Store;

/// Document-store backend: `users` and `interviews` collections keyed by
/// string `_id`.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection::<User>("users")
    }

    fn interviews(&self) -> Collection<InterviewSession> {
        self.db.collection::<InterviewSession>("interviews")
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn put_user(&self, user: &User) -> Result<()> {
        self.users()
            .replace_one(doc! { "_id": &user.id }, user)
            .upsert(true)
            .await
            .context("Failed to write user")?;
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.users()
            .find_one(doc! { "_id": id })
            .await
            .context("Failed to query user")
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.users()
            .find_one(doc! { "email": email })
            .await
            .context("Failed to query user by email")
    }

    async fn put_interview(&self, interview: &InterviewSession) -> Result<()> {
        self.interviews()
            .replace_one(doc! { "_id": &interview.id }, interview)
            .upsert(true)
            .await
            .context("Failed to write interview")?;
        Ok(())
    }

    async fn get_interview(&self, id: &str) -> Result<Option<InterviewSession>> {
        self.interviews()
            .find_one(doc! { "_id": id })
            .await
            .context("Failed to query interview")
    }

    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<InterviewSession>> {
        let cursor = self
            .interviews()
            .find(doc! { "userId": user_id })
            .await
            .context("Failed to query interviews")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read interview cursor")
    }

    async fn ping(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
