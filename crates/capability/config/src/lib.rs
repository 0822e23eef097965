//! 应用运行配置加载。

use std::env;

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
    /// 为 false 时翻译接口不返回 metaData。
    pub expose_meta: bool,
    pub max_body_bytes: u64,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr =
            env::var("PRISMA_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let expose_meta = read_bool_with_default("PRISMA_EXPOSE_META", true)?;
        let max_body_bytes = read_u64_with_default("PRISMA_MAX_BODY_BYTES", 64 * 1024)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "PRISMA_MAX_BODY_BYTES".to_string(),
                "0".to_string(),
            ));
        }

        Ok(Self {
            http_addr,
            expose_meta,
            max_body_bytes,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

/// 仅接受 1/true/on 与 0/false/off（不区分大小写）。
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
