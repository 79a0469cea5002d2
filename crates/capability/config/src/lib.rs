//! 应用运行配置加载。

use std::env;

/// 默认监听地址。
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:5000";

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    /// 是否为每个完成的请求输出一条 info 日志。
    pub request_log: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            request_log: true,
        }
    }
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr =
            read_optional("SHOP_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        if !http_addr.contains(':') {
            return Err(ConfigError::Invalid("SHOP_HTTP_ADDR".to_string(), http_addr));
        }
        let request_log = read_bool_with_default("SHOP_REQUEST_LOG", true)?;

        Ok(Self {
            http_addr,
            request_log,
        })
    }
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_bool_with_default(key: &str, default: bool) -> Result<bool, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}
