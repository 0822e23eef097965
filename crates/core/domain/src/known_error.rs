//! ORM 抛出的已知请求错误（翻译输入）。

use serde_json::{Map, Value};

/// 已知请求错误：携带稳定的错误码，以及可选的元数据。
///
/// `message` 为 ORM 原始消息，翻译时不会使用，仅保留用于日志。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnownRequestError {
    pub code: String,
    pub message: String,
    pub meta: Option<Map<String, Value>>,
    pub client_version: String,
    pub batch_request_idx: Option<u32>,
}

impl KnownRequestError {
    /// 仅以错误码构造，其余字段为空。
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_client_version(mut self, client_version: impl Into<String>) -> Self {
        self.client_version = client_version.into();
        self
    }

    pub fn with_batch_request_idx(mut self, idx: u32) -> Self {
        self.batch_request_idx = Some(idx);
        self
    }
}
