//! Session Store Port - 会话生命周期管理
//!
//! 定义会话存储的抽象接口，具体实现在 infrastructure/memory 层

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::view::PageView;
use crate::domain::session::MemeSession;

/// 单个会话的全部内存状态：状态机 + 页面
#[derive(Debug, Default)]
pub struct SessionWorkspace {
    pub session: MemeSession,
    pub view: PageView,
}

/// 会话槽位
///
/// 同一会话的操作通过该锁串行执行（包括等待外部服务的时间）
pub type SessionSlot = Arc<Mutex<SessionWorkspace>>;

/// 打开会话的结果
#[derive(Clone)]
pub struct OpenedSession {
    pub id: String,
    pub slot: SessionSlot,
    /// 是否为新建会话
    pub created: bool,
}

/// Session Store Port
///
/// 所有状态存储在内存中，重启即丢失
pub trait SessionStorePort: Send + Sync {
    /// 获取已有会话；id 为空或未知时新建
    fn open(&self, id: Option<&str>) -> OpenedSession;

    /// 查找已有会话并刷新活跃时间，不新建
    fn find(&self, id: &str) -> Option<SessionSlot>;

    /// 移除所有空闲超时的会话，返回移除数量
    ///
    /// 判断与移除在同一次遍历内完成；仍被请求持有的会话不会被移除
    fn remove_expired(&self, idle_timeout_secs: u64) -> usize;

    /// 当前会话数量
    fn count(&self) -> usize;
}
