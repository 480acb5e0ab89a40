// Session store trait for dashboard session state
use crate::application::session::{Session, SessionId};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A live session. Handlers mutate it in place under the lock.
pub type SharedSession = Arc<Mutex<Session>>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Handle to a live session, marking it as recently used.
    async fn get(&self, id: &SessionId) -> Option<SharedSession>;

    /// Add a session. May evict the least recently used one.
    async fn insert(&self, session: Session) -> SharedSession;

    /// Number of live sessions.
    async fn len(&self) -> u64;
}
