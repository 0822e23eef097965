//! 路由定义
//!
//! - 健康检查：/health
//! - 错误翻译：/translate
//! - 错误码表：/codes, /codes/:code
//! - 计数：/metrics

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/translate", post(translate))
        .route("/codes", get(list_codes))
        .route("/codes/:code", get(get_code))
        .route("/metrics", get(get_metrics))
}
