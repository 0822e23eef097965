//! Prisma 已知请求错误翻译。
//!
//! - table：静态错误码表与查表函数
//! - error：翻译后的错误类型 `PrismaError`
//!
//! 查表与构造均为纯函数，不记录日志也不修改输入；
//! 日志与计数由调用方（HTTP 层）负责。

pub mod error;
pub mod table;

pub use error::PrismaError;
pub use table::{entries, find, is_known, lookup};
