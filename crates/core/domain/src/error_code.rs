//! 错误码表条目与查表结果。

/// 翻译后错误的固定标题。
pub const PRISMA_ERROR_TITLE: &str = "Prisma Error";

/// 未识别错误码的默认结果。
pub const UNKNOWN_ERROR: ErrorInfo = ErrorInfo {
    message: "Unknown error",
    http_status: 500,
};

/// 错误码表中的一条记录（进程生命周期内不可变）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCodeEntry {
    pub code: &'static str,
    pub message: &'static str,
    pub http_status: u16,
}

impl ErrorCodeEntry {
    pub const fn new(code: &'static str, message: &'static str, http_status: u16) -> Self {
        Self {
            code,
            message,
            http_status,
        }
    }

    /// 去掉错误码后的消息与状态码。
    pub const fn info(&self) -> ErrorInfo {
        ErrorInfo {
            message: self.message,
            http_status: self.http_status,
        }
    }
}

/// 查表结果：对外消息与 HTTP 状态码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: &'static str,
    pub http_status: u16,
}
