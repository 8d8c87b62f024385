//! Page Queries - 页面查询

use crate::application::view::PageView;
use crate::domain::session::SessionState;

/// 获取页面查询
#[derive(Debug, Clone, Default)]
pub struct GetPageQuery {
    pub session_id: Option<String>,
}

/// 页面快照
#[derive(Debug, Clone)]
pub struct GetPageResponse {
    /// 已存在的会话 ID；首次访问或会话已过期时为 None
    pub session_id: Option<String>,
    pub state: SessionState,
    pub view: PageView,
}
