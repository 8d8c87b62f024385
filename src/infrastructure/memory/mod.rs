//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionStore，管理浏览器会话的内存状态

mod session_store;

pub use session_store::InMemorySessionStore;
