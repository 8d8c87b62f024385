//! HTTP Server
//!
//! 组装路由、浏览器会话层与请求追踪，并在配置地址上监听

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use super::browser_session::SESSION_COOKIE_NAME;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// 构建完整的应用 Router
///
/// 会话记录放在进程内存中，与页面会话一样重启即丢失
pub fn build_router(state: Arc<AppState>, cookie_secure: bool) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(cookie_secure);

    create_routes()
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        let router = build_router(Arc::new(state), config.cookie_secure);
        Self { config, router }
    }

    /// 启动服务器，收到关闭信号后停止接收新连接
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!(
            addr = %addr,
            cookie_secure = self.config.cookie_secure,
            "HTTP server listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal)
            .await
    }
}
