//! memegen - 随机模板配图
//!
//! 架构设计: Hexagonal Architecture + CQRS
//!
//! 领域层 (domain/):
//! - Meme Context: 模板、文本框内容、协议常量
//! - Session Context: 会话状态机
//!
//! 应用层 (application/):
//! - Ports: 端口定义（MemeApi, Renderer, SessionStore, IndexPicker）
//! - Controller: Meme Session Controller
//! - Commands / Queries: 基于会话存储的用例
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: imgflip HTTP 客户端、离线 Fake 客户端
//! - Memory: 会话存储
//! - Worker: 空闲会话清理
//! - HTTP: axum 服务端渲染页面

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
