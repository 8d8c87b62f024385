//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：读取会话页面快照

mod page_queries;

pub mod handlers;

pub use page_queries::*;
