//! In-Memory Session Store Implementation

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{OpenedSession, SessionSlot, SessionStorePort, SessionWorkspace};

struct StoredSession {
    slot: SessionSlot,
    last_activity: DateTime<Utc>,
}

impl StoredSession {
    /// 槽位被请求持有时引用计数大于 1
    fn in_use(&self) -> bool {
        Arc::strong_count(&self.slot) > 1
    }
}

/// 内存会话存储
pub struct InMemorySessionStore {
    sessions: DashMap<String, StoredSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    fn create(&self) -> OpenedSession {
        let id = Uuid::new_v4().to_string();
        let slot: SessionSlot = Arc::new(Mutex::new(SessionWorkspace::default()));
        self.sessions.insert(
            id.clone(),
            StoredSession {
                slot: slot.clone(),
                last_activity: Utc::now(),
            },
        );
        tracing::info!(session_id = %id, "Session created");
        OpenedSession {
            id,
            slot,
            created: true,
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStorePort for InMemorySessionStore {
    fn open(&self, id: Option<&str>) -> OpenedSession {
        if let Some(id) = id {
            if let Some(slot) = self.find(id) {
                return OpenedSession {
                    id: id.to_string(),
                    slot,
                    created: false,
                };
            }
            tracing::debug!(session_id = %id, "Unknown session, creating a new one");
        }
        self.create()
    }

    fn find(&self, id: &str) -> Option<SessionSlot> {
        self.sessions.get_mut(id).map(|mut stored| {
            stored.last_activity = Utc::now();
            stored.slot.clone()
        })
    }

    fn remove_expired(&self, idle_timeout_secs: u64) -> usize {
        let now = Utc::now();
        let timeout = chrono::Duration::seconds(idle_timeout_secs as i64);
        let mut removed = 0;

        // retain 持有分片写锁，与 open/find 刷新活跃时间互斥
        self.sessions.retain(|id, stored| {
            if now - stored.last_activity <= timeout || stored.in_use() {
                return true;
            }
            tracing::info!(session_id = %id, "Session expired");
            removed += 1;
            false
        });

        removed
    }

    fn count(&self) -> usize {
        self.sessions.len()
    }
}
