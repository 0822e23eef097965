//! 错误翻译接口
//!
//! - POST /translate：请求体为 ORM 已知请求错误，响应体为翻译后的错误，
//!   HTTP 状态码与 statusCode 一致

use api_contract::TranslateRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use prisma_telemetry::{record_translated, record_unknown_code};
use prisma_translate::{PrismaError, is_known};
use tracing::{debug, warn};

use crate::AppState;
use crate::utils::response::{
    bad_request_error, payload_too_large_error, prisma_error_response, request_to_domain,
};

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return payload_too_large_error();
        }
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "invalid translate request");
            return bad_request_error(rejection.body_text());
        }
    };
    let source = request_to_domain(req);
    let err = PrismaError::new(&source);

    record_translated();
    if is_known(&source.code) {
        debug!(
            code = %source.code,
            status = err.status_code(),
            batch_request_idx = ?source.batch_request_idx,
            "prisma error translated"
        );
    } else {
        record_unknown_code();
        warn!(
            code = %source.code,
            client_version = %source.client_version,
            original_message = %source.message,
            "unrecognized prisma error code"
        );
    }

    prisma_error_response(err, state.expose_meta)
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::{app, app_with_limit, post_json, send};
    use axum::http::{StatusCode, header};
    use serde_json::json;

    #[tokio::test]
    async fn translates_known_code_with_meta() {
        let payload = r#"{
            "code": "P2002",
            "clientVersion": "5.22.0",
            "meta": { "modelName": "User", "target": ["email"] }
        }"#;
        let (status, body) = send(app(true), post_json("/translate", payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({
                "title": "Prisma Error",
                "statusCode": 409,
                "message": "Unique constraint failed",
                "metaData": { "modelName": "User", "target": ["email"] }
            })
        );
    }

    #[tokio::test]
    async fn translates_unknown_code_to_500() {
        let (status, body) =
            send(app(true), post_json("/api/translate", r#"{"code":"P9999"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "title": "Prisma Error",
                "statusCode": 500,
                "message": "Unknown error"
            })
        );
    }

    #[tokio::test]
    async fn omits_meta_when_source_has_none() {
        let req = post_json("/translate", r#"{"code":"P2025"}"#);
        let (status, body) = send(app(true), req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.get("metaData").is_none());
    }

    #[tokio::test]
    async fn hides_meta_when_disabled() {
        let payload = r#"{"code":"P2003","meta":{"field_name":"authorId"}}"#;
        let (status, body) = send(app(false), post_json("/translate", payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body.get("metaData").is_none());
    }

    #[tokio::test]
    async fn malformed_bodies_use_invalid_request_envelope() {
        for payload in [r#"{"meta":{}}"#, r#"{"code":123}"#, "not json"] {
            let (status, body) = send(app(true), post_json("/translate", payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "status for {payload}");
            assert_eq!(body["success"], false);
            assert_eq!(body["error"]["code"], "INVALID.REQUEST", "code for {payload}");
        }
    }

    #[tokio::test]
    async fn body_over_limit_with_content_length_is_413() {
        let payload = r#"{"code":"P2002","meta":{"target":["email"]}}"#;
        let mut req = post_json("/translate", payload);
        req.headers_mut()
            .insert(header::CONTENT_LENGTH, payload.len().into());
        let (status, _) = send(app_with_limit(true, 16), req).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn streamed_body_over_limit_is_413() {
        let payload = r#"{"code":"P2002","meta":{"target":["email"]}}"#;
        let (status, body) =
            send(app_with_limit(true, 16), post_json("/translate", payload)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "INVALID.REQUEST");
    }

    #[tokio::test]
    async fn body_within_limit_is_translated() {
        let req = post_json("/translate", r#"{"code":"P2002"}"#);
        let (status, _) = send(app_with_limit(true, 16), req).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
