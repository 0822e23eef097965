//! 稳定的 DTO 与 API 响应契约。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 翻译请求体（ORM 已知请求错误的 JSON 形态）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
    #[serde(default)]
    pub client_version: Option<String>,
    #[serde(default)]
    pub batch_request_idx: Option<u32>,
}

/// 翻译后的错误体。无元数据时不输出 `metaData` 字段。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrismaErrorDto {
    pub title: String,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Map<String, Value>>,
}

/// 错误码表条目。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCodeDto {
    pub code: String,
    pub message: String,
    pub http_status: u16,
}

/// 计数快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub translated: u64,
    pub unknown_code: u64,
    pub codes_listed: u64,
}
