//! OTP handlers
//!
//! - POST /api/v2/user/otp：按手机号查找或创建用户，模拟下发 OTP
//! - POST /api/v2/user/otp/verification：模拟校验，任何 OTP 都通过
//!
//! 缺少 `mobileNumber`、`deviceId` 或 `otp` 时返回 400 并指明字段名。

use crate::AppState;
use crate::utils::parse_json;
use crate::utils::response::identity_error;
use api_contract::{
    ACCESS_DENIED, ACCESS_GRANTED, ApiResponse, MESSAGE_OTP_SENT, OtpRequest, OtpSentDto,
    OtpVerificationRequest, OtpVerificationResponse, field_text,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shop_identity::require_field;
use shop_telemetry::{record_otp_requested, record_otp_verified};

/// 请求 OTP
///
/// 同一手机号始终返回同一个 `userId`；`deviceId` 原样透传，不校验是否已登记。
/// 字段可以是任意 JSON 值，非字符串按 JSON 文本作为手机号键。
pub async fn request_otp(
    State(state): State<AppState>,
    body: Result<Json<OtpRequest>, JsonRejection>,
) -> Response {
    let req = match parse_json(body) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let mobile_number = match require_field(req.mobile_number, "mobileNumber") {
        Ok(value) => value,
        Err(err) => return identity_error(err),
    };
    let device_id = match require_field(req.device_id, "deviceId") {
        Ok(value) => value,
        Err(err) => return identity_error(err),
    };

    let mobile_number = field_text(&mobile_number);

    match state
        .identity
        .request_otp(&mobile_number, &field_text(&device_id))
        .await
    {
        Ok(issued) => {
            record_otp_requested(issued.user_created);
            tracing::info!(
                user_id = %issued.user_id,
                user_created = issued.user_created,
                "otp requested"
            );
            let data = OtpSentDto {
                message: MESSAGE_OTP_SENT.to_string(),
                user_id: issued.user_id.into_string(),
                device_id,
            };
            (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
        }
        Err(err) => identity_error(err),
    }
}

/// 校验 OTP
///
/// 响应不使用标准封装：`{otp: "<otp> accepted", Access: "Granted"}`。
/// 非字符串 OTP 按 JSON 文本回显。
pub async fn verify_otp(
    State(state): State<AppState>,
    body: Result<Json<OtpVerificationRequest>, JsonRejection>,
) -> Response {
    let req = match parse_json(body) {
        Ok(req) => req,
        Err(response) => return response,
    };
    let otp = match require_field(req.otp, "otp") {
        Ok(value) => value,
        Err(err) => return identity_error(err),
    };

    match state.identity.verify_otp(&field_text(&otp)).await {
        Ok(result) => {
            record_otp_verified();
            let response = if result.is_accepted() {
                OtpVerificationResponse {
                    otp: format!("{} accepted", result.otp),
                    access: ACCESS_GRANTED.to_string(),
                }
            } else {
                OtpVerificationResponse {
                    otp: format!("{} rejected", result.otp),
                    access: ACCESS_DENIED.to_string(),
                }
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => identity_error(err),
    }
}
