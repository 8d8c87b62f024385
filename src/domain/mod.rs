//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Meme Context: 模板与配图
//! - Session Context: 会话状态机

pub mod meme;
pub mod session;
