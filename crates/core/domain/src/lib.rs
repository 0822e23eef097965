//! 领域模型：ORM 已知请求错误与错误码表条目。

pub mod error_code;
pub mod known_error;

pub use error_code::{ErrorCodeEntry, ErrorInfo, PRISMA_ERROR_TITLE, UNKNOWN_ERROR};
pub use known_error::KnownRequestError;
