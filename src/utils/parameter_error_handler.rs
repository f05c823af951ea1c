//! 请求参数解析错误处理
//!
//! JSON 请求体或查询串反序列化失败时返回 400，而不是 actix 默认的裸文本。
//! 响应体沿用接口约定的 `{"error": "..."}` 形状。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ErrorResponse;

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let message = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body too large"
        }
        JsonPayloadError::ContentType => "Content-Type must be application/json",
        _ => "Invalid JSON request body",
    };
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string error on {}: {}", req.path(), err);
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new("Invalid query string parameters"));
    InternalError::from_response(err, response).into()
}
