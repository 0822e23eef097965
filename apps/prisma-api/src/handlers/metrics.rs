//! 计数快照
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use prisma_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            translated: snapshot.translated,
            unknown_code: snapshot.unknown_code,
            codes_listed: snapshot.codes_listed,
        })),
    )
        .into_response()
}
