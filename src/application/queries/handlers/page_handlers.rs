//! Page Query Handlers

use std::sync::Arc;

use crate::application::ports::SessionStorePort;
use crate::application::queries::page_queries::*;
use crate::application::view::PageView;
use crate::domain::session::SessionState;

/// GetPage Handler
///
/// 只读：没有会话时返回空白页面，不新建会话
pub struct GetPageHandler {
    session_store: Arc<dyn SessionStorePort>,
}

impl GetPageHandler {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    pub async fn handle(&self, query: GetPageQuery) -> GetPageResponse {
        let slot = query
            .session_id
            .as_deref()
            .and_then(|id| self.session_store.find(id));

        match slot {
            Some(slot) => {
                let workspace = slot.lock().await;
                GetPageResponse {
                    session_id: query.session_id,
                    state: workspace.session.state(),
                    view: workspace.view.clone(),
                }
            }
            None => GetPageResponse {
                session_id: None,
                state: SessionState::Idle,
                view: PageView::default(),
            },
        }
    }
}
