//! HTTP 响应辅助函数和 DTO 转换
//!
//! - 错误响应：prisma_error_response, bad_request_error, payload_too_large_error, not_found_error
//! - DTO 转换：request_to_domain, prisma_error_to_dto, entry_to_dto

use api_contract::{ApiResponse, ErrorCodeDto, PrismaErrorDto, TranslateRequest};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{ErrorCodeEntry, KnownRequestError};
use prisma_translate::PrismaError;

/// 翻译后错误响应：HTTP 状态码取自错误本身。
pub fn prisma_error_response(err: PrismaError, expose_meta: bool) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(prisma_error_to_dto(err, expose_meta))).into_response()
}

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 请求体超限响应
pub fn payload_too_large_error() -> Response {
    (
        StatusCode::PAYLOAD_TOO_LARGE,
        Json(ApiResponse::<()>::error(
            "INVALID.REQUEST",
            "request body too large",
        )),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", message.into())),
    )
        .into_response()
}

/// TranslateRequest 转 KnownRequestError
pub fn request_to_domain(req: TranslateRequest) -> KnownRequestError {
    KnownRequestError {
        code: req.code,
        message: req.message.unwrap_or_default(),
        meta: req.meta,
        client_version: req.client_version.unwrap_or_default(),
        batch_request_idx: req.batch_request_idx,
    }
}

/// PrismaError 转 PrismaErrorDto；`expose_meta` 为 false 时丢弃元数据。
pub fn prisma_error_to_dto(err: PrismaError, expose_meta: bool) -> PrismaErrorDto {
    let title = err.title().to_string();
    let status_code = err.status_code();
    let message = err.message().to_string();
    let meta_data = if expose_meta {
        err.into_meta_data()
    } else {
        None
    };
    PrismaErrorDto {
        title,
        status_code,
        message,
        meta_data,
    }
}

/// ErrorCodeEntry 转 ErrorCodeDto
pub fn entry_to_dto(entry: &ErrorCodeEntry) -> ErrorCodeDto {
    ErrorCodeDto {
        code: entry.code.to_string(),
        message: entry.message.to_string(),
        http_status: entry.http_status,
    }
}
