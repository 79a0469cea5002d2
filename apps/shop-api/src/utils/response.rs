//! HTTP 响应辅助函数
//!
//! 所有错误返回统一的 ApiResponse 格式，HTTP 状态码与错误码对应：
//! - 400 REQUEST.MISSING_FIELD：缺少必填字段
//! - 400 INVALID.REQUEST：请求体不是合法 JSON 或字段类型不符
//! - 404 RESOURCE.NOT_FOUND：路由不存在
//! - 500 INTERNAL.ERROR：存储或 OTP 通道错误

use api_contract::{ApiResponse, CODE_INTERNAL, CODE_INVALID_REQUEST, CODE_NOT_FOUND};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shop_identity::IdentityError;
use shop_telemetry::record_bad_request;

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    record_bad_request();
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(CODE_INVALID_REQUEST, message.into())),
    )
        .into_response()
}

/// 缺少必填字段响应
pub fn missing_field_error(field: &str) -> Response {
    record_bad_request();
    tracing::warn!(field, "missing required field");
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::missing_field(field)),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(CODE_NOT_FOUND, "not found")),
    )
        .into_response()
}

/// 身份服务错误响应
pub fn identity_error(err: IdentityError) -> Response {
    match err {
        IdentityError::MissingField(field) => missing_field_error(field),
        IdentityError::Storage(_) | IdentityError::Otp(_) => {
            tracing::error!(error = %err, "identity operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(CODE_INTERNAL, err.to_string())),
            )
                .into_response()
        }
    }
}
