use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

use crate::{
    controllers::StudyGroupPage, domain::SessionId,
    utils::constants::{MAX_SESSIONS, SESSION_IDLE_TTL},
};

pub type PageHandle = Arc<RwLock<StudyGroupPage>>;

struct Session {
    page: PageHandle,
    last_seen: Instant,
}

/// In-memory page sessions keyed by the session cookie. Sessions idle for
/// longer than the TTL are treated as gone and dropped on eviction. At most
/// `max_sessions` are held; beyond that the least recently seen is dropped.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_IDLE_TTL, MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Returns a live session's page and marks the session as seen.
    pub async fn get(&self, id: &SessionId) -> Option<PageHandle> {
        let mut sessions = self.sessions.write().await;
        let expired = sessions.get(id)?.last_seen.elapsed() >= self.idle_ttl;
        if expired {
            sessions.remove(id);
            return None;
        }
        let session = sessions.get_mut(id)?;
        session.last_seen = Instant::now();
        Some(session.page.clone())
    }

    pub async fn insert(&self, id: SessionId, page: StudyGroupPage) -> PageHandle {
        let page = Arc::new(RwLock::new(page));
        let mut sessions = self.sessions.write().await;

        if sessions.len() >= self.max_sessions {
            sessions.retain(|_, session| session.last_seen.elapsed() < self.idle_ttl);
        }
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            tracing::debug!("session limit reached, dropping least recently seen");
            sessions.remove(&oldest);
        }

        sessions.insert(
            id,
            Session {
                page: page.clone(),
                last_seen: Instant::now(),
            },
        );
        page
    }

    /// Drops idle sessions and returns how many were removed.
    #[tracing::instrument(name = "Evicting idle sessions", skip_all)]
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen.elapsed() < self.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "evicted idle sessions");
        }
        evicted
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
