//! 翻译后的错误类型。

use domain::{KnownRequestError, PRISMA_ERROR_TITLE};
use serde_json::{Map, Value};

use crate::table::lookup;

/// Prisma 错误：由已知请求错误翻译而来，携带 HTTP 状态码与对外消息。
///
/// `meta_data` 为源错误元数据的独立拷贝，之后修改源错误不会影响它。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct PrismaError {
    title: &'static str,
    status_code: u16,
    message: String,
    meta_data: Option<Map<String, Value>>,
}

impl PrismaError {
    /// 查表翻译，不修改输入。
    pub fn new(source: &KnownRequestError) -> Self {
        Self::from_parts(&source.code, source.meta.clone())
    }

    fn from_parts(code: &str, meta_data: Option<Map<String, Value>>) -> Self {
        let info = lookup(code);
        Self {
            title: PRISMA_ERROR_TITLE,
            status_code: info.http_status,
            message: info.message.to_string(),
            meta_data,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn meta_data(&self) -> Option<&Map<String, Value>> {
        self.meta_data.as_ref()
    }

    /// 拆出元数据所有权（HTTP 层序列化时使用）。
    pub fn into_meta_data(self) -> Option<Map<String, Value>> {
        self.meta_data
    }
}

impl From<&KnownRequestError> for PrismaError {
    fn from(source: &KnownRequestError) -> Self {
        Self::new(source)
    }
}

impl From<KnownRequestError> for PrismaError {
    fn from(source: KnownRequestError) -> Self {
        Self::from_parts(&source.code, source.meta)
    }
}
