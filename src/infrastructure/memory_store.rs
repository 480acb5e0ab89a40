// In-memory session store with least-recently-used eviction
use crate::application::session::{Session, SessionId};
use crate::application::session_store::{SessionStore, SharedSession};
use async_trait::async_trait;
use moka::future::Cache;
use moka::policy::EvictionPolicy;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct InMemorySessionStore {
    sessions: Cache<SessionId, SharedSession>,
}

impl InMemorySessionStore {
    pub fn new(capacity: usize) -> Self {
        let sessions = Cache::builder()
            .max_capacity(capacity.max(1) as u64)
            .eviction_policy(EvictionPolicy::lru())
            .eviction_listener(|id: Arc<SessionId>, _, cause| {
                if cause.was_evicted() {
                    tracing::debug!(session = %id, ?cause, "Evicted session");
                }
            })
            .build();
        Self { sessions }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &SessionId) -> Option<SharedSession> {
        self.sessions.get(id).await
    }

    async fn insert(&self, session: Session) -> SharedSession {
        let id = session.id.clone();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(id, shared.clone()).await;
        shared
    }

    async fn len(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::FilterSelection;
    use chrono::NaiveDate;

    fn id(raw: &str) -> SessionId {
        SessionId::parse(raw).unwrap()
    }

    fn session(raw: &str) -> Session {
        Session::new(
            id(raw),
            FilterSelection::default_for(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemorySessionStore::new(4);
        store.insert(session("a1")).await;
        let loaded = store.get(&id("a1")).await.unwrap();
        assert_eq!(loaded.lock().await.id.as_str(), "a1");
        assert!(store.get(&id("b2")).await.is_none());
    }

    #[tokio::test]
    async fn test_evicts_least_recently_used() {
        let store = InMemorySessionStore::new(2);
        store.insert(session("a1")).await;
        store.insert(session("b2")).await;
        assert_eq!(store.len().await, 2);

        // Touch a1 so b2 becomes the oldest
        store.get(&id("a1")).await;
        store.len().await;
        store.insert(session("c3")).await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(&id("a1")).await.is_some());
        assert!(store.get(&id("b2")).await.is_none());
        assert!(store.get(&id("c3")).await.is_some());
    }

    #[tokio::test]
    async fn test_updates_are_visible_through_every_handle() {
        let store = InMemorySessionStore::new(1);
        let first = store.insert(session("a1")).await;
        let second = store.get(&id("a1")).await.unwrap();

        first.lock().await.refresh();

        assert_eq!(second.lock().await.generation, 1);
        assert_eq!(store.len().await, 1);
    }
}
