use anyhow::Result;
use async_trait::async_trait;

use crate::models::{InterviewSession, User};

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Persistence interface over the `users/{id}` and `interviews/{id}` trees.
///
/// Two backends implement it: the managed document store and an in-process
/// map for local development. The backend is chosen once at startup and
/// injected into services as `Arc<dyn Store>`; `put_*` operations upsert.
#[async_trait]
pub trait Store: Send + Sync {
    async fn put_user(&self, user: &User) -> Result<()>;
    async fn get_user(&self, id: &str) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn put_interview(&self, interview: &InterviewSession) -> Result<()>;
    async fn get_interview(&self, id: &str) -> Result<Option<InterviewSession>>;
    /// All sessions owned by the user, in no particular order.
    async fn interviews_for_user(&self, user_id: &str) -> Result<Vec<InterviewSession>>;

    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}
