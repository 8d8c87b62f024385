//! Session Sweeper - 定期清理空闲会话

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::SessionStorePort;

/// Sweeper 配置
#[derive(Debug, Clone)]
pub struct SessionSweeperConfig {
    /// 清理间隔（秒）
    pub interval_secs: u64,
    /// 会话空闲超时（秒）
    pub idle_expire_secs: u64,
}

impl Default for SessionSweeperConfig {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            idle_expire_secs: 3600,
        }
    }
}

/// 会话清理 Worker
pub struct SessionSweeper {
    config: SessionSweeperConfig,
    store: Arc<dyn SessionStorePort>,
}

impl SessionSweeper {
    pub fn new(config: SessionSweeperConfig, store: Arc<dyn SessionStorePort>) -> Self {
        Self { config, store }
    }

    /// 启动 Worker
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.config.interval_secs,
            idle_expire_secs = self.config.idle_expire_secs,
            "SessionSweeper started"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        // 第一次 tick 立即返回
        interval.tick().await;

        loop {
            interval.tick().await;
            self.sweep_once();
        }
    }

    /// 清理一次，返回移除的会话数量
    pub fn sweep_once(&self) -> usize {
        let removed = self.store.remove_expired(self.config.idle_expire_secs);

        if removed > 0 {
            tracing::info!(
                removed = removed,
                remaining = self.store.count(),
                "Idle sessions swept"
            );
        }
        removed
    }
}
