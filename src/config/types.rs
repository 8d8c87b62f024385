//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 配图服务配置
    #[serde(default)]
    pub imgflip: ImgflipConfig,

    /// 会话配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 会话 cookie 是否只允许 HTTPS 发送
    #[serde(default)]
    pub cookie_secure: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 配图服务配置
#[derive(Clone, Deserialize)]
pub struct ImgflipConfig {
    /// 服务基础 URL
    #[serde(default = "default_imgflip_url")]
    pub base_url: String,

    /// 服务账号
    #[serde(default)]
    pub username: String,

    /// 服务密码
    #[serde(default)]
    pub password: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_imgflip_timeout")]
    pub timeout_secs: u64,

    /// 使用离线 Fake 客户端（不访问网络）
    #[serde(default)]
    pub fake: bool,
}

fn default_imgflip_url() -> String {
    "https://api.imgflip.com".to_string()
}

fn default_imgflip_timeout() -> u64 {
    30
}

impl Default for ImgflipConfig {
    fn default() -> Self {
        Self {
            base_url: default_imgflip_url(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_imgflip_timeout(),
            fake: false,
        }
    }
}

impl std::fmt::Debug for ImgflipConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImgflipConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .field("fake", &self.fake)
            .finish()
    }
}

/// 会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// 会话空闲超时（秒）
    #[serde(default = "default_idle_expire")]
    pub idle_expire_secs: u64,

    /// 清理间隔（秒）
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_idle_expire() -> u64 {
    3600 // 1 小时
}

fn default_sweep_interval() -> u64 {
    300
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_expire_secs: default_idle_expire(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
