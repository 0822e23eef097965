//! 错误码表查询
//!
//! - GET /codes：完整错误码表
//! - GET /codes/:code：单个错误码，未识别时返回 404

use api_contract::{ApiResponse, ErrorCodeDto};
use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prisma_telemetry::record_codes_listed;
use prisma_translate::{entries, find};

use crate::utils::response::{entry_to_dto, not_found_error};

pub async fn list_codes() -> Response {
    record_codes_listed();
    let codes: Vec<ErrorCodeDto> = entries().iter().map(entry_to_dto).collect();
    (StatusCode::OK, Json(ApiResponse::success(codes))).into_response()
}

pub async fn get_code(Path(code): Path<String>) -> Response {
    match find(&code) {
        Some(entry) => {
            (StatusCode::OK, Json(ApiResponse::success(entry_to_dto(entry)))).into_response()
        }
        None => not_found_error(format!("unknown error code: {code}")),
    }
}
