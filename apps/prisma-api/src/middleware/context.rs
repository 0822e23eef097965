//! 请求上下文中间件：沿用上游 x-request-id（若有），生成 trace_id，
//! 在 `request` span 内执行后续处理，并把两者回写到响应头。

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use prisma_telemetry::{RequestIds, request_ids_from};
use tracing::{Instrument, info_span};

const REQUEST_ID: &str = "x-request-id";
const TRACE_ID: &str = "x-trace-id";

pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let incoming = req
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok());
    let ids = request_ids_from(incoming);
    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %req.method(),
        path = %req.uri().path()
    );
    req.extensions_mut().insert(ids.clone());

    let mut response = next.run(req).instrument(span).await;
    write_ids(response.headers_mut(), &ids);
    response
}

fn write_ids(headers: &mut HeaderMap, ids: &RequestIds) {
    for (name, value) in [(REQUEST_ID, &ids.request_id), (TRACE_ID, &ids.trace_id)] {
        if let Ok(value) = HeaderValue::from_str(value) {
            headers.insert(name, value);
        }
    }
}
