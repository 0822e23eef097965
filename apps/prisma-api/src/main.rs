//! Prisma 错误翻译 HTTP 服务。

mod handlers;
mod middleware;
mod routes;
mod utils;

use axum::Router;
use prisma_config::AppConfig;
use prisma_telemetry::init_tracing;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::middleware::request_context;

#[derive(Clone)]
pub struct AppState {
    pub expose_meta: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let state = AppState {
        expose_meta: config.expose_meta,
    };
    let app = build_app(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, expose_meta = config.expose_meta, "prisma-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// 组装路由与中间件（/ 与 /api 两种前缀）。
pub fn build_app(state: AppState, max_body_bytes: u64) -> Router {
    let api = routes::create_api_router();
    let limit = usize::try_from(max_body_bytes).unwrap_or(usize::MAX);

    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(limit))
        .layer(TraceLayer::new_for_http())
        // 注入 request_id/trace_id
        .layer(axum::middleware::from_fn(request_context))
}
