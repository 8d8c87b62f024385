//! HTTP Layer - 服务端渲染页面
//!
//! 每个浏览器对应一个会话（tower-sessions cookie），页面由会话的 PageView 渲染

pub mod browser_session;
pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer};
pub use state::AppState;
