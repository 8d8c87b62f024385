//! memegen - 随机模板配图服务

use std::sync::Arc;

use memegen::application::{MemeApiPort, MemeSessionController, RandomPicker, SessionStorePort};
use memegen::config::{load_config, print_config};
use memegen::infrastructure::adapters::{
    FakeImgflipClient, HttpImgflipClient, HttpImgflipClientConfig,
};
use memegen::infrastructure::http::{AppState, HttpServer};
use memegen::infrastructure::memory::InMemorySessionStore;
use memegen::infrastructure::worker::{SessionSweeper, SessionSweeperConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},memegen={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("memegen - random meme captioning");
    print_config(&config);

    // 创建配图客户端
    let meme_api: Arc<dyn MemeApiPort> = if config.imgflip.fake {
        Arc::new(FakeImgflipClient::with_defaults())
    } else {
        let api_config = HttpImgflipClientConfig::new(&config.imgflip.base_url)
            .with_credentials(&config.imgflip.username, &config.imgflip.password)
            .with_timeout(config.imgflip.timeout_secs);
        Arc::new(HttpImgflipClient::new(api_config)?)
    };

    // 控制器与会话存储
    let controller = Arc::new(MemeSessionController::new(meme_api, Arc::new(RandomPicker)));
    let session_store: Arc<dyn SessionStorePort> = Arc::new(InMemorySessionStore::new());

    // 启动空闲会话清理
    let sweeper = SessionSweeper::new(
        SessionSweeperConfig {
            interval_secs: config.session.sweep_interval_secs,
            idle_expire_secs: config.session.idle_expire_secs,
        },
        session_store.clone(),
    );
    tokio::spawn(sweeper.run());

    // 创建 HTTP 服务器
    let state = AppState::new(session_store, controller);
    let server = HttpServer::new(config.server.clone(), state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
