//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `MEMEGEN_SERVER__PORT=8080`
/// - `MEMEGEN_IMGFLIP__USERNAME=someone`
/// - `MEMEGEN_IMGFLIP__PASSWORD=...`
/// - `MEMEGEN_IMGFLIP__FAKE=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("server.cookie_secure", false)?
        .set_default("imgflip.base_url", "https://api.imgflip.com")?
        .set_default("imgflip.username", "")?
        .set_default("imgflip.password", "")?
        .set_default("imgflip.timeout_secs", 30)?
        .set_default("imgflip.fake", false)?
        .set_default("session.idle_expire_secs", 3600)?
        .set_default("session.sweep_interval_secs", 300)?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 前缀: MEMEGEN_
    // 层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("MEMEGEN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.imgflip.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Imgflip base URL cannot be empty".to_string(),
        ));
    }

    // Fake 客户端不需要账号
    if !config.imgflip.fake
        && (config.imgflip.username.is_empty() || config.imgflip.password.is_empty())
    {
        return Err(ConfigError::ValidationError(
            "Imgflip username and password are required (or set imgflip.fake = true)".to_string(),
        ));
    }

    if config.session.sweep_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session sweep interval cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Secure Cookie: {}", config.server.cookie_secure);
    if config.imgflip.fake {
        tracing::info!("Imgflip: offline fake client");
    } else {
        tracing::info!("Imgflip URL: {}", config.imgflip.base_url);
        tracing::info!("Imgflip User: {}", config.imgflip.username);
        tracing::info!("Imgflip Timeout: {}s", config.imgflip.timeout_secs);
    }
    tracing::info!("Session Idle Expire: {}s", config.session.idle_expire_secs);
    tracing::info!("Session Sweep Interval: {}s", config.session.sweep_interval_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.imgflip.username = "user".to_string();
        config.imgflip.password = "secret".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_credentials() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_fake_client_needs_no_credentials() {
        let mut config = AppConfig::default();
        config.imgflip.fake = true;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = valid_config();
        config.imgflip.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_sweep_interval() {
        let mut config = valid_config();
        config.session.sweep_interval_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memegen.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8088\ncookie_secure = true\n\n[imgflip]\nfake = true\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = load_config_from_path(Some(path.as_path())).unwrap();

        assert_eq!(config.server.port, 8088);
        assert!(config.server.cookie_secure);
        assert!(config.imgflip.fake);
        assert_eq!(config.imgflip.timeout_secs, 5);
        assert_eq!(config.session.sweep_interval_secs, 300);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_config_from_path(Some(path.as_path())).is_err());
    }
}
