//! Session Context - 会话限界上下文
//!
//! 职责:
//! - 会话状态机
//! - 当前选中模板

mod aggregate;
mod errors;

pub use aggregate::{MemeSession, SessionState};
pub use errors::TransitionError;
