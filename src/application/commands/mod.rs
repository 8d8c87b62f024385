//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：修改会话状态与页面

mod meme_commands;

pub mod handlers;

pub use meme_commands::*;
